use std::io::Cursor;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use wumpus::shell::{BANNER, INSTRUCTIONS, Shell, ShellExit};
use wumpus_core::{Cave, InputPayload, RoomId, RunOutcome, Session};

fn room(n: u8) -> RoomId {
    RoomId::new(n).unwrap()
}

/// Placements in order: pits, bats, wumpus, player.
fn session(placements: [u8; 6]) -> Session<ChaCha8Rng> {
    let cave = Cave::with_placements(placements.map(room)).unwrap();
    Session::from_cave(7, cave, ChaCha8Rng::seed_from_u64(7))
}

fn play(session: &mut Session<ChaCha8Rng>, offer: bool, input: &str) -> (ShellExit, String) {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let exit = shell.run(session, offer).unwrap();
    (exit, String::from_utf8(shell.into_output()).unwrap())
}

#[test]
fn shooting_the_wumpus_next_door_wins() {
    let mut game = session([11, 17, 8, 13, 2, 1]);
    let (exit, output) = play(&mut game, true, "N\nS\n1\n2\n");

    assert_eq!(exit, ShellExit::Finished(RunOutcome::Victory));
    assert!(output.starts_with(BANNER));
    assert!(output.contains("\tI smell a Wumpus!\n"));
    assert!(output.contains("The arrow disappears into the darkness.\n"));
    assert!(output.contains("AHA! You got the Wumpus!\n"));
    assert!(output.ends_with("HEE HEE HEE - The Wumpus will getcha next time\n"));
    assert!(!output.contains(INSTRUCTIONS));
}

#[test]
fn walking_into_a_pit_loses() {
    let mut game = session([2, 17, 8, 13, 20, 1]);
    let (exit, output) = play(&mut game, true, "n\nm\n2\n");

    assert_eq!(exit, ShellExit::Finished(RunOutcome::Defeat));
    assert!(output.contains("You are in room 1\n\tI feel a draft!\nTunnels lead to 2, 5, 6.\n"));
    assert!(!output.contains("I smell a Wumpus!"));
    assert!(output.contains("YYYYIIIIEEEE... Fell in a pit.\n"));
    assert!(output.ends_with("HA HA HA - You lose\n"));
}

#[test]
fn invalid_answers_reprompt_without_spending_a_turn() {
    let mut game = session([11, 17, 8, 13, 20, 1]);
    let (exit, output) = play(&mut game, true, "n\nx\nm\n9\ns\n7\nm\n5\n");

    assert_eq!(exit, ShellExit::InputClosed);
    assert!(output.contains("Please enter S or M to choose action.\n"));
    assert!(output.contains("WHERE TO? Please enter valid room number.\n"));
    assert!(output.contains("NO. OF ROOMS (1-5)? Please enter a number from 1 to 5.\n"));
    assert!(output.contains("You are in room 5\n"));
    assert_eq!(game.turn(), 1);
    assert_eq!(game.arrows(), 5);
    assert_eq!(game.journal().inputs.len(), 1);
    assert_eq!(game.journal().inputs[0].payload, InputPayload::Move { room: room(5) });
}

#[test]
fn bad_room_numbers_in_a_shot_are_asked_again() {
    let mut game = session([11, 17, 8, 13, 3, 1]);
    let (exit, output) = play(&mut game, false, "s\n2\n0\n2\n21\n3\n");

    assert_eq!(exit, ShellExit::Finished(RunOutcome::Victory));
    assert_eq!(output.matches("Please enter real room numbers.").count(), 2);
    assert_eq!(output.matches("ROOM#? ").count(), 4);
    assert_eq!(
        game.journal().inputs[0].payload,
        InputPayload::Shoot { path: vec![room(2), room(3)] }
    );
}

#[test]
fn instructions_are_shown_on_request() {
    let mut game = session([11, 17, 8, 13, 20, 1]);
    let (exit, output) = play(&mut game, true, "y\n");

    assert_eq!(exit, ShellExit::InputClosed);
    assert!(output.contains("SHOW INSTRUCTIONS (Y-N)? "));
    assert!(output.contains(INSTRUCTIONS));
    assert_eq!(game.turn(), 0);
}

#[test]
fn empty_input_closes_cleanly() {
    let mut game = session([11, 17, 8, 13, 20, 1]);
    let (exit, output) = play(&mut game, false, "");

    assert_eq!(exit, ShellExit::InputClosed);
    assert!(!output.contains("SHOW INSTRUCTIONS"));
    assert!(output.contains("You are in room 1\n"));
    assert!(output.contains("SHOOT OR MOVE (S-M)? "));
    assert!(!game.is_over());
}
