use crate::{
    cave::CaveError,
    game::{GameError, Session},
    journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION},
    types::RunOutcome,
};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error("journal format {found} is not supported (expected {JOURNAL_FORMAT_VERSION})")]
    UnsupportedFormat { found: u16 },
    #[error("cave could not be rebuilt: {0}")]
    Cave(#[from] CaveError),
    #[error("input {seq} was rejected: {source}")]
    Rejected { seq: u64, source: GameError },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    /// `None` when the journal stops before the game ended.
    pub final_outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { found: journal.format_version });
    }

    let mut session = Session::new(journal.seed)?;
    for record in &journal.inputs {
        let applied = match &record.payload {
            InputPayload::Move { room } => session.move_player(*room),
            InputPayload::Shoot { path } => session.shoot_arrow(path),
        };
        if let Err(source) = applied {
            return Err(ReplayError::Rejected { seq: record.seq, source });
        }
    }

    Ok(ReplayResult {
        final_outcome: session.outcome(),
        final_snapshot_hash: session.snapshot_hash(),
        final_turn: session.turn(),
    })
}
