use super::super::{Board, Color, MoveList, Square};
use super::sliders::QUEEN_DIRECTIONS;

impl Board {
    /// One step in each of the eight directions. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.push_leaper_targets(from, color, &QUEEN_DIRECTIONS, &mut moves);
        moves
    }
}
