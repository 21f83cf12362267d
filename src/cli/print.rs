use std::fmt;
use std::io::{self, Write};

use crate::board::{Color, Square, SquareMark};
use crate::game::{Effect, GameSession};

/// Board diagram with the current selection and its destinations marked.
struct Highlighted<'a>(&'a GameSession);

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let selected = game.selection().origin();
        let targets = game.valid_moves();
        game.board().write_diagram(f, |sq| {
            if selected == Some(sq) {
                SquareMark::Selected
            } else if targets.contains(&sq) {
                SquareMark::Target
            } else {
                SquareMark::Plain
            }
        })
    }
}

/// Draw the board with the selection in brackets, empty destinations as `*`
/// and capturable pieces suffixed with `x`.
pub fn print_board<W: Write>(out: &mut W, game: &GameSession) -> io::Result<()> {
    write!(out, "{}", Highlighted(game))
}

pub fn print_status<W: Write>(out: &mut W, game: &GameSession) -> io::Result<()> {
    for color in Color::BOTH {
        let symbols: String = game
            .captured()
            .by(color)
            .iter()
            .map(|p| p.symbol())
            .collect();
        writeln!(out, "captured by {color}: {symbols}")?;
    }
    match game.status().winner() {
        Some(_) => writeln!(out, "*** {}! *** (type 'reset' to play again)", game.status()),
        None => writeln!(out, "{} to move", game.current_player()),
    }
}

pub fn print_effect<W: Write>(out: &mut W, effect: &Effect) -> io::Result<()> {
    match effect {
        Effect::Selected { origin, moves } => {
            let list: Vec<String> = moves.to_sorted_vec().iter().map(Square::to_string).collect();
            if list.is_empty() {
                writeln!(out, "selected {origin}: no moves")
            } else {
                writeln!(out, "selected {origin}: {}", list.join(" "))
            }
        }
        Effect::Deselected => writeln!(out, "selection cleared"),
        Effect::MoveCommitted {
            from,
            to,
            piece,
            captured,
        } => match captured {
            Some(victim) => writeln!(out, "{piece} {from} -> {to}, captures {victim}"),
            None => writeln!(out, "{piece} {from} -> {to}"),
        },
        Effect::GameOver { winner } => writeln!(out, "{winner} captured the king"),
        Effect::TurnChanged(_) => Ok(()),
    }
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  <square>            select a piece or move the selected one (e2 or '6 4')")?;
    writeln!(out, "  board               redraw the board")?;
    writeln!(out, "  reset               start a new game")?;
    writeln!(out, "  set <option> <val>  change an option (flip_turn_on_game_over)")?;
    writeln!(out, "  quit                leave")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(game: &GameSession) -> String {
        let mut buf = Vec::new();
        print_board(&mut buf, game).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_board_marks_selection_and_targets() {
        let mut game = GameSession::new();
        game.on_square_selected(Square(6, 4));
        let text = render(&game);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[6].contains("[♙]"), "{}", lines[6]);
        assert_eq!(lines[5].matches('*').count(), 1);
        assert_eq!(lines[4].matches('*').count(), 1);
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn test_idle_board_is_plain_diagram() {
        let game = GameSession::new();
        assert_eq!(render(&game), game.board().to_string());
    }

    #[test]
    fn test_status_lines() {
        let game = GameSession::new();
        let mut buf = Vec::new();
        print_status(&mut buf, &game).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("white to move"));
        assert!(text.contains("captured by black: \n"));
    }
}
