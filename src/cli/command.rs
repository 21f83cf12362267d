use crate::board::{Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select or move to a square.
    Square(Square),
    Reset,
    Board,
    Set { name: String, value: String },
    Help,
    Quit,
    /// Input that could not be understood, with the reason.
    Invalid(String),
}

/// Parse one line of input. Blank lines yield `None`.
///
/// Squares are accepted as algebraic (`e2`) or as `row col` pairs (`6 4`).
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "reset" | "new" => Command::Reset,
        "board" | "show" => Command::Board,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "set" => match parts.as_slice() {
            [_, name @ .., value] if !name.is_empty() => Command::Set {
                name: name.join(" "),
                value: (*value).to_string(),
            },
            _ => Command::Invalid("usage: set <option> <value>".to_string()),
        },
        _ => match parse_square(&parts) {
            Ok(sq) => Command::Square(sq),
            Err(e) => Command::Invalid(e.to_string()),
        },
    };

    Some(cmd)
}

fn parse_square(parts: &[&str]) -> Result<Square, SquareError> {
    match parts {
        [algebraic] => algebraic.parse(),
        [row, col] => {
            let invalid = || SquareError::InvalidNotation {
                notation: format!("{row} {col}"),
            };
            let row = row.parse::<usize>().map_err(|_| invalid())?;
            let col = col.parse::<usize>().map_err(|_| invalid())?;
            Square::try_from((row, col))
        }
        _ => Err(SquareError::InvalidNotation {
            notation: parts.join(" "),
        }),
    }
}
