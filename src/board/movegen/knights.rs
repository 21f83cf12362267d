use super::super::{Board, Color, MoveList, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.push_leaper_targets(from, color, &KNIGHT_OFFSETS, &mut moves);
        moves
    }
}
