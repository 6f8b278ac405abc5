use wumpus_core::{EntityKind, RoomView};

const CLUE_ORDER: [EntityKind; 3] = [EntityKind::Wumpus, EntityKind::Pit, EntityKind::Bats];

pub fn clue_line(kind: EntityKind) -> Option<&'static str> {
    match kind {
        EntityKind::Wumpus => Some("I smell a Wumpus!"),
        EntityKind::Pit => Some("I feel a draft!"),
        EntityKind::Bats => Some("I hear flapping!"),
        EntityKind::Player => None,
    }
}

/// The block shown at the start of every turn: the room number, one tabbed
/// line per nearby hazard kind and the three exits.
pub fn describe_room(view: &RoomView) -> String {
    let mut text = format!("\nYou are in room {}\n", view.id);
    for line in CLUE_ORDER.into_iter().filter(|kind| view.clues.contains(kind)).filter_map(clue_line) {
        text.push('\t');
        text.push_str(line);
        text.push('\n');
    }
    let [a, b, c] = view.exits;
    text.push_str(&format!("Tunnels lead to {a}, {b}, {c}.\n\n"));
    text
}
