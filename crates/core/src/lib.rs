pub mod cave;
pub mod dice;
pub mod game;
pub mod journal;
pub mod replay;
pub mod types;

pub use cave::{Cave, CaveError, Entity, Room};
pub use dice::Dice;
pub use game::{GameError, Session, TurnReport, resolve_events};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use types::*;
