//! Pseudo-legal destination generation.
//!
//! Moves are generated per piece: a destination is listed when the piece's
//! movement pattern reaches it and it is empty or holds an opposing piece.
//! Checks, castling, en passant and promotion are not part of this ruleset.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, MoveList, Piece, PieceKind, Square};

/// Destinations reachable by `piece` standing on `from`.
///
/// Pure: reads the board, never mutates it. The piece is taken as given, so
/// callers may ask about a piece that is not actually on `from`.
#[must_use]
pub fn valid_moves(from: Square, piece: Piece, board: &Board) -> MoveList {
    board.generate_piece_moves(from, piece)
}

impl Board {
    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece) -> MoveList {
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, color),
            PieceKind::Knight => self.generate_knight_moves(from, color),
            PieceKind::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, color, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, color),
        }
    }

    /// Destinations for whatever stands on `from`; empty when the square is empty.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        match self.piece_at(from) {
            Some(piece) => self.generate_piece_moves(from, piece),
            None => MoveList::new(),
        }
    }

    /// True when `sq` may be entered by a piece of `color`: empty or enemy-held.
    #[inline]
    pub(crate) fn is_open_for(&self, sq: Square, color: Color) -> bool {
        match self.piece_at(sq) {
            Some(occupant) => occupant.color != color,
            None => true,
        }
    }

    /// Push every on-board `from + offset` that `color` may enter.
    pub(crate) fn push_leaper_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.is_open_for(to, color) {
                    moves.push(to);
                }
            }
        }
    }
}
