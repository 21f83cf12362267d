//! Terminal front end: one player after the other at the same keyboard.
//!
//! Reads commands line by line, validates squares before they reach the
//! game session, and redraws the board after every change.

use std::io::{self, BufRead, Write};

use crate::game::{GameSession, SessionConfig};

pub mod command;
pub mod print;

pub use command::{parse_command, Command};

/// Run an interactive session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, config: SessionConfig) -> io::Result<()> {
    let mut game = GameSession::with_config(config);

    print::print_board(&mut out, &game)?;
    print::print_status(&mut out, &game)?;
    prompt(&mut out, &game)?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            prompt(&mut out, &game)?;
            continue;
        };

        match cmd {
            Command::Square(sq) => {
                let effects = game.on_square_selected(sq);
                if effects.is_empty() {
                    if game.is_over() {
                        writeln!(out, "game over: {}", game.status())?;
                    } else {
                        writeln!(out, "nothing to select on {sq}")?;
                    }
                } else {
                    for effect in &effects {
                        print::print_effect(&mut out, effect)?;
                    }
                    print::print_board(&mut out, &game)?;
                    print::print_status(&mut out, &game)?;
                }
            }
            Command::Reset => {
                game.reset();
                print::print_board(&mut out, &game)?;
                print::print_status(&mut out, &game)?;
            }
            Command::Board => {
                print::print_board(&mut out, &game)?;
                print::print_status(&mut out, &game)?;
            }
            Command::Set { name, value } => match game.config_mut().apply_option(&name, &value) {
                Ok(()) => writeln!(out, "{}", game.config())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Help => print::print_help(&mut out)?,
            Command::Quit => break,
            Command::Invalid(reason) => writeln!(out, "error: {reason}")?,
        }

        prompt(&mut out, &game)?;
    }

    out.flush()
}

fn prompt<W: Write>(out: &mut W, game: &GameSession) -> io::Result<()> {
    write!(out, "{}> ", game.current_player())?;
    out.flush()
}
