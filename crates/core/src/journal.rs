use crate::types::RoomId;

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every accepted action of one session, enough to rebuild it from its seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { room: RoomId },
    Shoot { path: Vec<RoomId> },
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, inputs: Vec::new() }
    }

    pub fn append_move(&mut self, room: RoomId, seq: u64) {
        self.inputs.push(InputRecord { seq, payload: InputPayload::Move { room } });
    }

    pub fn append_shot(&mut self, path: Vec<RoomId>, seq: u64) {
        self.inputs.push(InputRecord { seq, payload: InputPayload::Shoot { path } });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
