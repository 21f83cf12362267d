//! Piece-placement strings: the board field of FEN, row 0 first.

use super::error::PlacementError;
use super::{Board, Piece, Square, BOARD_SIZE};

/// Placement of the standard starting arrangement.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from a placement string such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// The first field is row 0 (Black's back rank). Any trailing
    /// whitespace-separated FEN fields are ignored.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                    if col >= BOARD_SIZE {
                        return Err(PlacementError::WrongRowLength {
                            row,
                            squares: col + 1,
                        });
                    }
                    board.place(Square(row, col), piece);
                    col += 1;
                }
            }
            if col != BOARD_SIZE {
                return Err(PlacementError::WrongRowLength { row, squares: col });
            }
        }

        Ok(board)
    }

    /// Serialize the board to a placement string.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}
