use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        let Some(forward_sq) = from.offset(dir, 0) else {
            return moves;
        };

        if self.is_empty(forward_sq) {
            moves.push(forward_sq);
            if from.row() == color.pawn_start_rank() {
                if let Some(double_sq) = from.offset(2 * dir, 0) {
                    if self.is_empty(double_sq) {
                        moves.push(double_sq);
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target_sq) = from.offset(dir, dc) {
                if let Some(target) = self.piece_at(target_sq) {
                    if target.color != color {
                        moves.push(target_sq);
                    }
                }
            }
        }

        moves
    }
}
