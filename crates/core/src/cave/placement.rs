//! Initial entity placement. Hazards and the player need an empty room; the
//! wumpus may land anywhere, including on a hazard.

use super::CaveError;
use crate::dice::Dice;
use crate::types::{ROOM_COUNT, RoomId, Thing};

/// Rooms for every entity, indexed in `Thing::ALL` order.
pub(super) fn choose_placements(dice: &mut impl Dice) -> Result<[RoomId; Thing::COUNT], CaveError> {
    let mut occupied = [false; ROOM_COUNT];
    let mut placements = [RoomId::from_index(0); Thing::COUNT];

    for thing in Thing::ALL {
        let candidates: Vec<RoomId> = RoomId::all()
            .filter(|room| thing == Thing::Wumpus || !occupied[room.index()])
            .collect();
        if candidates.is_empty() {
            return Err(CaveError::NoEmptyRoom { thing });
        }
        let room = dice.pick(&candidates);
        occupied[room.index()] = true;
        placements[thing.index()] = room;
        tracing::trace!(?thing, %room, "placed");
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always takes the first candidate.
    struct LowestRoll;

    impl Dice for LowestRoll {
        fn roll_below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn hazards_fill_lowest_empty_rooms_and_wumpus_may_share() {
        let placements = choose_placements(&mut LowestRoll).expect("placements");
        let rooms = placements.map(RoomId::get);
        // Pits and bats take 1..=4, the wumpus joins Pit1 in room 1, the
        // player skips every occupied room.
        assert_eq!(rooms, [1, 2, 3, 4, 1, 5]);
    }
}
