//! A single game session. Owns the cave, the player's quiver and the event
//! logs of the player and the wumpus, and turns each action into the ordered
//! events the front-end presents.

use std::mem;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::cave::{Cave, CaveError};
use crate::dice::Dice;
use crate::journal::InputJournal;
use crate::types::*;

mod hash;
mod player;
mod resolution;
mod wumpus;

#[cfg(test)]
mod test_support;

pub use resolution::{TurnReport, resolve_events};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("an arrow path needs 1 to {MAX_SHOT_PATH} rooms, got {len}")]
    InvalidShotPath { len: usize },
}

#[derive(Clone, Debug)]
struct PlayerState {
    arrows: u8,
    events: Vec<Event>,
}

#[derive(Clone, Debug, Default)]
struct WumpusState {
    events: Vec<Event>,
}

#[derive(Clone, Debug)]
pub struct Session<D = ChaCha8Rng> {
    seed: u64,
    turn: u64,
    dice: D,
    cave: Cave,
    player: PlayerState,
    wumpus: WumpusState,
    outcome: Option<RunOutcome>,
    journal: InputJournal,
}

impl Session<ChaCha8Rng> {
    /// Builds and populates a fresh cave from `seed`.
    pub fn new(seed: u64) -> Result<Self, CaveError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cave = Cave::generate(&mut rng)?;
        Ok(Self::from_cave(seed, cave, rng))
    }
}

impl<D: Dice> Session<D> {
    /// Starts a session over an already populated cave. `seed` is only recorded
    /// in the journal.
    pub fn from_cave(seed: u64, cave: Cave, dice: D) -> Self {
        Self {
            seed,
            turn: 0,
            dice,
            cave,
            player: PlayerState { arrows: STARTING_ARROWS, events: Vec::new() },
            wumpus: WumpusState::default(),
            outcome: None,
            journal: InputJournal::new(seed),
        }
    }

    pub fn current_room(&self) -> RoomView {
        self.cave.view(self.cave.location(Thing::Player))
    }

    /// Walks through a tunnel. A room that is not connected yields
    /// `Event::CantGoThere` and changes nothing else.
    pub fn move_player(&mut self, target: RoomId) -> Result<Vec<Event>, GameError> {
        self.ensure_running()?;
        self.journal.append_move(target, self.turn);
        self.walk(target);
        Ok(self.finish_turn())
    }

    pub fn shoot_arrow(&mut self, path: &[RoomId]) -> Result<Vec<Event>, GameError> {
        self.ensure_running()?;
        if path.is_empty() || path.len() > MAX_SHOT_PATH {
            return Err(GameError::InvalidShotPath { len: path.len() });
        }
        self.journal.append_shot(path.to_vec(), self.turn);
        self.loose_arrow(path);
        self.wumpus_hears_arrow();
        Ok(self.finish_turn())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn arrows(&self) -> u8 {
        self.player.arrows
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cave(&self) -> &Cave {
        &self.cave
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.outcome {
            Some(_) => Err(GameError::GameOver),
            None => Ok(()),
        }
    }

    fn finish_turn(&mut self) -> Vec<Event> {
        let report =
            resolve_events(mem::take(&mut self.player.events), mem::take(&mut self.wumpus.events));
        self.turn += 1;
        if let Some(outcome) = report.outcome {
            tracing::debug!(turn = self.turn, ?outcome, "game over");
            self.outcome = Some(outcome);
        }
        report.events
    }
}
