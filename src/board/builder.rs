//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than parsing placement strings.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse::<Square>().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse::<Square>().unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(6, 0).unwrap(), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.place(square, piece);
        }
        board
    }
}
