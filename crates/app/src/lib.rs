pub mod journal_file;
pub mod room_text;
pub mod seed;
pub mod shell;

use wumpus_core::RunOutcome;

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `RunOutcome` to its reason code string.
pub fn reason_code(outcome: Option<RunOutcome>) -> &'static str {
    match outcome {
        Some(RunOutcome::Victory) => "WIN_WUMPUS_SHOT",
        Some(RunOutcome::Defeat) => "LOSS",
        None => "IN_PROGRESS",
    }
}
