use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

/// Standard back-rank order, a-file to h-file.
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const FILES: &str = "abcdefgh";

/// An 8x8 grid of optional pieces.
///
/// The board is a plain container: `set` performs no legality checks and
/// nothing prevents placing two kings of one color. Rules live in the
/// move generator and the game session.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board in the standard starting arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.initialize();
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Reset to the standard starting arrangement: Black on rows 0-1,
    /// White on rows 6-7.
    pub fn initialize(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.place(Square(Color::Black.back_rank(), col), Piece::new(kind, Color::Black));
            self.place(
                Square(Color::Black.pawn_start_rank(), col),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
            self.place(
                Square(Color::White.pawn_start_rank(), col),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            self.place(Square(Color::White.back_rank(), col), Piece::new(kind, Color::White));
        }
    }

    /// Read a square given raw coordinates.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Piece>, BoardError> {
        let sq = Square::new(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        Ok(self.piece_at(sq))
    }

    /// Overwrite a square given raw coordinates. No legality check.
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) -> Result<(), BoardError> {
        let sq = Square::new(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        self.put(sq, piece);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Overwrite a typed square, returning what stood there before.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.0][sq.1], piece)
    }

    #[inline]
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of the given color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Location of the first king of `color`, scanning from row 0.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.is_king())
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoration of one square in [`Board::write_diagram`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SquareMark {
    #[default]
    Plain,
    /// Drawn in brackets.
    Selected,
    /// `*` on an empty square, an `x` suffix on an occupied one.
    Target,
}

impl Board {
    /// Write a Unicode diagram with White at the bottom, one three-column
    /// cell per square, decorated by `mark`.
    pub fn write_diagram<W: fmt::Write>(
        &self,
        out: &mut W,
        mark: impl Fn(Square) -> SquareMark,
    ) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(out, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let sq = Square(row, col);
                let piece = self.piece_at(sq);
                let decoration = mark(sq);
                let glyph = match piece {
                    Some(p) => p.symbol(),
                    None if decoration == SquareMark::Target => '*',
                    None if sq.is_light() => '.',
                    None => ':',
                };
                match decoration {
                    SquareMark::Selected => write!(out, "[{glyph}]")?,
                    SquareMark::Target if piece.is_some() => write!(out, " {glyph}x")?,
                    _ => write!(out, " {glyph} ")?,
                }
            }
            writeln!(out)?;
        }

        write!(out, "  ")?;
        for file in FILES.chars() {
            write!(out, " {file} ")?;
        }
        writeln!(out)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_diagram(f, |_| SquareMark::Plain)
    }
}
