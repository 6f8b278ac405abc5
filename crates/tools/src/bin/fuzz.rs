use std::io;

use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wumpus_core::{Dice, EntityKind, MAX_SHOT_PATH, RoomId, RunOutcome, Session, Thing};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    games: u32,
    /// Turn cap per game; a game still running at the cap is counted as stalled
    #[arg(short, long, default_value_t = 500)]
    max_turns: u64,
}

#[derive(Default, Debug)]
struct Tally {
    victories: u32,
    defeats: u32,
    stalled: u32,
}

fn play_one(game_seed: u64, rng: &mut ChaCha8Rng, max_turns: u64) -> Result<Option<RunOutcome>> {
    let mut session = Session::new(game_seed)?;
    let all_rooms: Vec<RoomId> = RoomId::all().collect();

    while !session.is_over() && session.turn() < max_turns {
        let here = session.current_room();
        let arrows_before = session.arrows();

        // Shoot roughly one turn in four, always along a typed path of valid rooms.
        let events = if rng.roll_below(4) == 0 {
            let len = 1 + rng.roll_below(MAX_SHOT_PATH);
            let path: Vec<RoomId> = (0..len).map(|_| rng.pick(&all_rooms)).collect();
            let events = session.shoot_arrow(&path)?;
            assert_eq!(
                session.arrows() + 1,
                arrows_before,
                "Invariant failed: shot did not spend one arrow"
            );
            events
        } else {
            let events = session.move_player(rng.pick(&here.exits))?;
            assert_eq!(session.arrows(), arrows_before, "Invariant failed: moving spent an arrow");
            events
        };
        debug!(game_seed, turn = session.turn(), ?events, "turn");

        let cave = session.cave();
        assert!(cave.influence_is_consistent(), "Invariant failed: stale clues on seed {game_seed}");
        for room in cave.rooms() {
            for &exit in room.connections() {
                assert!(
                    cave.room(exit).is_connected_to(room.id()),
                    "Invariant failed: one-way tunnel {} -> {exit}",
                    room.id()
                );
            }
        }
        let player = cave.location(Thing::Player);
        assert!(
            !cave.room(player).holds(EntityKind::Wumpus) || session.is_over(),
            "Invariant failed: alive in the wumpus room"
        );
        if session.arrows() == 0 {
            assert!(session.is_over(), "Invariant failed: empty quiver left the game running");
        }
        if let Some(terminal) = events.iter().position(|event| event.outcome().is_some()) {
            assert_eq!(terminal + 1, events.len(), "Invariant failed: events after terminal one");
            assert!(session.is_over(), "Invariant failed: terminal event did not end the game");
        }
    }

    Ok(session.outcome())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} games...", args.seed, args.games);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tally = Tally::default();

    for game in 0..args.games {
        let game_seed = rng.next_u64();
        match play_one(game_seed, &mut rng, args.max_turns)? {
            Some(RunOutcome::Victory) => tally.victories += 1,
            Some(RunOutcome::Defeat) => tally.defeats += 1,
            None => {
                info!(game, game_seed, "game hit the turn cap");
                tally.stalled += 1;
            }
        }
    }

    println!(
        "Fuzzing completed successfully: {} won, {} lost, {} stalled.",
        tally.victories, tally.defeats, tally.stalled
    );
    Ok(())
}
