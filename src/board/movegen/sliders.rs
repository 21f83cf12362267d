use super::super::{Board, Color, MoveList, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, dc) in slider.directions() {
            self.walk_ray(from, color, dr, dc, &mut moves);
        }
        moves
    }

    /// Extend from `from` one square at a time until the edge or the first
    /// occupied square, which is included only when it holds an enemy.
    fn walk_ray(&self, from: Square, color: Color, dr: isize, dc: isize, moves: &mut MoveList) {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match self.piece_at(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
