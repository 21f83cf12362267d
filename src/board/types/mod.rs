//! Core board types.
//!
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a (row, col) coordinate on the 8x8 grid
//! - `MoveList` - destinations produced by the move generator

mod moves;
mod piece;
mod square;

pub use moves::{MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
