//! Board representation and move generation.
//!
//! The board is a mailbox: an 8x8 array of optional pieces. It is a dumb
//! container; the move generator reads it to list pseudo-legal destinations
//! and the game session in [`crate::game`] decides what gets written back.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{valid_moves, Board, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! let moves = valid_moves(e2, pawn, &board);
//! let e4 = Square::new(4, 4).unwrap();
//! let e3 = Square::new(5, 4).unwrap();
//! assert_eq!(moves.to_sorted_vec(), vec![e4, e3]);
//! ```

mod builder;
mod error;
mod movegen;
mod placement;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, PlacementError, SquareError};
pub use movegen::valid_moves;
pub use placement::START_PLACEMENT;
pub use state::{Board, SquareMark};
pub use types::{Color, MoveList, MoveListIntoIter, Piece, PieceKind, Square, BOARD_SIZE};
