use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const ROOM_COUNT: usize = 20;
pub const CONNECTIONS_PER_ROOM: usize = 3;
pub const STARTING_ARROWS: u8 = 5;
/// Rooms an arrow can cross before it drops.
pub const ARROW_RANGE: u8 = 5;
pub const MAX_SHOT_PATH: usize = 5;
pub const MIN_BAT_HOPS: usize = 1;
pub const MAX_BAT_HOPS: usize = 5;
/// The wumpus wakes on `WUMPUS_WAKE_CHANCES` out of `WUMPUS_WAKE_SIDES` rolls.
pub const WUMPUS_WAKE_CHANCES: usize = 3;
pub const WUMPUS_WAKE_SIDES: usize = 4;

/// A room number in `1..=ROOM_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoomId(u8);

impl RoomId {
    pub fn new(number: u8) -> Option<Self> {
        (1..=ROOM_COUNT as u8).contains(&number).then_some(Self(number))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = RoomId> {
        (1..=ROOM_COUNT as u8).map(Self)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < ROOM_COUNT);
        Self(index as u8 + 1)
    }
}

impl TryFrom<u8> for RoomId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("room {number} is outside 1..={ROOM_COUNT}"))
    }
}

impl From<RoomId> for u8 {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Pit,
    Bats,
    Wumpus,
    Player,
}

impl EntityKind {
    /// How many tunnels away this kind can be sensed. The player only perceives.
    pub fn sensing_radius(self) -> u8 {
        match self {
            Self::Pit | Self::Bats => 1,
            Self::Wumpus => 2,
            Self::Player => 0,
        }
    }
}

/// Identity of every entity living in the cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Thing {
    Pit1,
    Pit2,
    Bats1,
    Bats2,
    Wumpus,
    Player,
}

impl Thing {
    pub const COUNT: usize = 6;
    /// Placement order used when a cave is populated.
    pub const ALL: [Thing; Thing::COUNT] =
        [Self::Pit1, Self::Pit2, Self::Bats1, Self::Bats2, Self::Wumpus, Self::Player];

    pub fn kind(self) -> EntityKind {
        match self {
            Self::Pit1 | Self::Pit2 => EntityKind::Pit,
            Self::Bats1 | Self::Bats2 => EntityKind::Bats,
            Self::Wumpus => EntityKind::Wumpus,
            Self::Player => EntityKind::Player,
        }
    }

    pub fn sensing_radius(self) -> u8 {
        self.kind().sensing_radius()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

impl RunOutcome {
    pub fn closing_message(self) -> &'static str {
        match self {
            Self::Victory => "HEE HEE HEE - The Wumpus will getcha next time",
            Self::Defeat => "HA HA HA - You lose",
        }
    }
}

pub const LOSS_MARKERS: [&str; 3] = ["...OOPS", "YYYYIIIIEEEE", "TSK TSK TSK"];
pub const WIN_MARKER: &str = "AHA";

/// Something that happened during a turn, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    CantGoThere,
    BatSnatch,
    FellInPit,
    BumpedWumpus,
    WumpusGotYou,
    ArrowReturned,
    WumpusShot,
    OutOfArrows,
    WumpusWoke,
    WumpusBumpedYou,
}

impl Event {
    pub fn message(self) -> &'static str {
        match self {
            Self::CantGoThere => "You can't go there.",
            Self::BatSnatch => "ZAP - Super bat snatch! Elsewheresville for you!",
            Self::FellInPit => "YYYYIIIIEEEE... Fell in a pit.",
            Self::BumpedWumpus => "...OOPS! Bumped a Wumpus!",
            Self::WumpusGotYou => "TSK TSK TSK - Wumpus got you!",
            Self::ArrowReturned => "...OOPS! Your arrow returns and kills you!",
            Self::WumpusShot => "AHA! You got the Wumpus!",
            Self::OutOfArrows => "...OOPS! You are out of arrows!",
            Self::WumpusWoke => "HUSH! The Wumpus heard the arrow and woke up.",
            Self::WumpusBumpedYou => "Wumpus bumped you!",
        }
    }

    /// The outcome this event's message announces, if it carries a terminal marker.
    pub fn outcome(self) -> Option<RunOutcome> {
        terminal_outcome(self.message())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn terminal_outcome(message: &str) -> Option<RunOutcome> {
    if LOSS_MARKERS.iter().any(|marker| message.contains(marker)) {
        Some(RunOutcome::Defeat)
    } else if message.contains(WIN_MARKER) {
        Some(RunOutcome::Victory)
    } else {
        None
    }
}

/// Read-only snapshot of the player's room for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomView {
    pub id: RoomId,
    pub exits: [RoomId; CONNECTIONS_PER_ROOM],
    pub clues: BTreeSet<EntityKind>,
}
