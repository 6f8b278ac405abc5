use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wumpus_core::{InputJournal, ReplayResult, replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Inputs: {}", journal.inputs.len());
    println!("Final Turn: {}", result.final_turn);
    println!("Outcome: {:?}", result.final_outcome);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
