use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wumpus::journal_file::write_journal_atomic;
use wumpus::seed::{SeedChoice, generate_runtime_seed};
use wumpus::shell::Shell;
use wumpus::{format_seed, format_snapshot_hash, reason_code};
use wumpus_core::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hunt the Wumpus in a twenty-room cave", long_about = None)]
struct Args {
    /// Seed for the cave layout and every random event; generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start straight away without offering the instructions
    #[arg(long)]
    skip_instructions: bool,

    /// Write the inputs of this session to a JSON journal on exit
    #[arg(short, long)]
    journal: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = SeedChoice::resolve(args.seed, generate_runtime_seed());
    info!(seed = %format_seed(seed.value()), generated = seed.is_generated(), "starting session");

    let mut session = Session::new(seed.value()).context("failed to build the cave")?;
    let exit = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(stdin.lock(), stdout.lock());
        shell.run(&mut session, !args.skip_instructions).context("terminal I/O failed")?
    };

    info!(
        ?exit,
        reason = reason_code(session.outcome()),
        turns = session.turn(),
        hash = %format_snapshot_hash(session.snapshot_hash()),
        "session ended"
    );

    if let Some(path) = &args.journal {
        write_journal_atomic(session.journal(), path)
            .with_context(|| format!("failed to write journal {}", path.display()))?;
        info!(path = %path.display(), "journal written");
    }

    Ok(())
}
