//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl<D: Dice> Session<D> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(self.player.arrows);
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat) => 2,
        });
        for thing in Thing::ALL {
            hasher.write_u8(self.cave.location(thing).get());
        }
        hasher.finish()
    }
}
