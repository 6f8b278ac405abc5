//! Turn resolution: player events first, then the wumpus's, cut at the first
//! terminal marker.

use crate::types::{Event, RunOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Events to present, ending with the terminal one when the game ended.
    pub events: Vec<Event>,
    pub outcome: Option<RunOutcome>,
}

pub fn resolve_events(player_events: Vec<Event>, wumpus_events: Vec<Event>) -> TurnReport {
    let mut events = Vec::with_capacity(player_events.len() + wumpus_events.len());
    for event in player_events.into_iter().chain(wumpus_events) {
        events.push(event);
        if let Some(outcome) = event.outcome() {
            return TurnReport { events, outcome: Some(outcome) };
        }
    }
    TurnReport { events, outcome: None }
}
