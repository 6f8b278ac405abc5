//! Line-oriented front-end. Reads answers from any `BufRead`, writes prompts
//! and event messages to any `Write`, and drives a [`Session`] until the game
//! ends or input runs out.

use std::io::{self, BufRead, Write};

use tracing::debug;
use wumpus_core::{Dice, MAX_SHOT_PATH, RoomId, RoomView, RunOutcome, Session};

use crate::room_text::describe_room;

pub const INSTRUCTIONS: &str = include_str!("../assets/instructions.txt");

pub const BANNER: &str = "HUNT THE WUMPUS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellExit {
    Finished(RunOutcome),
    InputClosed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Action {
    Move(RoomId),
    Shoot(Vec<RoomId>),
}

/// Result of one sub-dialogue. `Retry` sends the player back to the
/// shoot-or-move question without spending a turn.
enum Reply<T> {
    Given(T),
    Retry,
    Closed,
}

/// Parses a room number typed by the player.
pub fn parse_room(answer: &str) -> Option<RoomId> {
    answer.trim().parse::<u8>().ok().and_then(RoomId::new)
}

/// Parses the number of rooms an arrow should fly through.
pub fn parse_shot_length(answer: &str) -> Option<usize> {
    answer.trim().parse::<usize>().ok().filter(|len| (1..=MAX_SHOT_PATH).contains(len))
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<D: Dice>(
        &mut self,
        session: &mut Session<D>,
        offer_instructions: bool,
    ) -> io::Result<ShellExit> {
        writeln!(self.output, "{BANNER}\n")?;
        if offer_instructions {
            let Some(answer) = self.prompt("SHOW INSTRUCTIONS (Y-N)? ")? else {
                return Ok(ShellExit::InputClosed);
            };
            if answer.eq_ignore_ascii_case("y") {
                writeln!(self.output, "{INSTRUCTIONS}")?;
            }
        }

        loop {
            let here = session.current_room();
            write!(self.output, "{}", describe_room(&here))?;

            let Some(action) = self.read_action(&here)? else {
                return Ok(ShellExit::InputClosed);
            };
            debug!(?action, turn = session.turn(), "player action");
            let events = match action {
                Action::Move(room) => session.move_player(room),
                Action::Shoot(path) => {
                    writeln!(self.output, "The arrow disappears into the darkness.")?;
                    session.shoot_arrow(&path)
                }
            }
            .map_err(io::Error::other)?;

            for event in &events {
                writeln!(self.output, "{event}")?;
            }
            if let Some(outcome) = session.outcome() {
                writeln!(self.output, "{}", outcome.closing_message())?;
                self.output.flush()?;
                return Ok(ShellExit::Finished(outcome));
            }
        }
    }

    fn read_action(&mut self, here: &RoomView) -> io::Result<Option<Action>> {
        loop {
            let Some(choice) = self.prompt("SHOOT OR MOVE (S-M)? ")? else {
                return Ok(None);
            };
            let reply = if choice.eq_ignore_ascii_case("s") {
                self.read_shot()?
            } else if choice.eq_ignore_ascii_case("m") {
                self.read_move(here)?
            } else {
                writeln!(self.output, "Please enter S or M to choose action.")?;
                Reply::Retry
            };
            match reply {
                Reply::Given(action) => return Ok(Some(action)),
                Reply::Retry => continue,
                Reply::Closed => return Ok(None),
            }
        }
    }

    fn read_move(&mut self, here: &RoomView) -> io::Result<Reply<Action>> {
        let Some(answer) = self.prompt("WHERE TO? ")? else {
            return Ok(Reply::Closed);
        };
        match parse_room(&answer).filter(|room| here.exits.contains(room)) {
            Some(room) => Ok(Reply::Given(Action::Move(room))),
            None => {
                writeln!(self.output, "Please enter valid room number.")?;
                Ok(Reply::Retry)
            }
        }
    }

    fn read_shot(&mut self) -> io::Result<Reply<Action>> {
        let Some(answer) = self.prompt("NO. OF ROOMS (1-5)? ")? else {
            return Ok(Reply::Closed);
        };
        let Some(len) = parse_shot_length(&answer) else {
            writeln!(self.output, "Please enter a number from 1 to 5.")?;
            return Ok(Reply::Retry);
        };

        let mut path = Vec::with_capacity(len);
        while path.len() < len {
            let Some(answer) = self.prompt("ROOM#? ")? else {
                return Ok(Reply::Closed);
            };
            match parse_room(&answer) {
                Some(room) => path.push(room),
                None => writeln!(self.output, "Please enter real room numbers.")?,
            }
        }
        Ok(Reply::Given(Action::Shoot(path)))
    }

    /// Writes `question` without a newline and reads one trimmed line.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_numbers_must_be_in_the_cave() {
        assert_eq!(parse_room(" 7 ").map(RoomId::get), Some(7));
        assert_eq!(parse_room("20").map(RoomId::get), Some(20));
        assert_eq!(parse_room("0"), None);
        assert_eq!(parse_room("21"), None);
        assert_eq!(parse_room("-3"), None);
        assert_eq!(parse_room("seven"), None);
        assert_eq!(parse_room(""), None);
    }

    #[test]
    fn shot_length_is_one_to_five() {
        assert_eq!(parse_shot_length("1"), Some(1));
        assert_eq!(parse_shot_length("5"), Some(5));
        assert_eq!(parse_shot_length("0"), None);
        assert_eq!(parse_shot_length("6"), None);
        assert_eq!(parse_shot_length("x"), None);
    }
}
