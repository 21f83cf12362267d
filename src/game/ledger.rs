#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece};

/// Pieces captured by each side, in capture order.
///
/// `by_white` holds black pieces White has taken and vice versa. Entries are
/// only ever appended; `clear` is used on reset.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedPieces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pieces captured by `color`.
    #[must_use]
    pub fn by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }

    pub(crate) fn record(&mut self, captor: Color, piece: Piece) {
        match captor {
            Color::White => self.by_white.push(piece),
            Color::Black => self.by_black.push(piece),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.by_white.clear();
        self.by_black.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_white.len() + self.by_black.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_record_keeps_order_per_captor() {
        let mut ledger = CapturedPieces::new();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let knight = Piece::new(PieceKind::Knight, Color::White);

        ledger.record(Color::White, pawn);
        ledger.record(Color::Black, knight);
        ledger.record(Color::White, rook);

        assert_eq!(ledger.by(Color::White), &[pawn, rook]);
        assert_eq!(ledger.by(Color::Black), &[knight]);
        assert_eq!(ledger.len(), 3);

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
