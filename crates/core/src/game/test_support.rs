//! Shared fixtures for the `game` test suites: fixed cave layouts and dice
//! that replay a scripted list of rolls.

use std::collections::VecDeque;

use super::*;

pub(super) fn room(number: u8) -> RoomId {
    RoomId::new(number).expect("fixture room in range")
}

/// Replays `rolls` in order and fails the test on any roll it was not scripted for.
#[derive(Clone, Debug)]
pub(super) struct ScriptedDice {
    rolls: VecDeque<usize>,
}

impl ScriptedDice {
    pub(super) fn new(rolls: &[usize]) -> Self {
        Self { rolls: rolls.iter().copied().collect() }
    }

    pub(super) fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll_below(&mut self, bound: usize) -> usize {
        let roll = self.rolls.pop_front().unwrap_or_else(|| panic!("unscripted roll below {bound}"));
        assert!(roll < bound, "scripted roll {roll} is not below {bound}");
        roll
    }
}

/// Entity rooms for a fixed cave. The default keeps every hazard away from
/// the player's starting room 1 and its tunnels 2, 5 and 6.
#[derive(Clone, Copy, Debug)]
pub(super) struct Layout {
    pub(super) pits: [u8; 2],
    pub(super) bats: [u8; 2],
    pub(super) wumpus: u8,
    pub(super) player: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self { pits: [11, 17], bats: [8, 13], wumpus: 20, player: 1 }
    }
}

impl Layout {
    pub(super) fn cave(self) -> Cave {
        Cave::with_placements([
            room(self.pits[0]),
            room(self.pits[1]),
            room(self.bats[0]),
            room(self.bats[1]),
            room(self.wumpus),
            room(self.player),
        ])
        .expect("fixture cave")
    }

    pub(super) fn session(self, rolls: &[usize]) -> Session<ScriptedDice> {
        Session::from_cave(0, self.cave(), ScriptedDice::new(rolls))
    }
}

pub(super) fn player_room<D: Dice>(session: &Session<D>) -> RoomId {
    session.cave().location(Thing::Player)
}
