//! Two-player local chess: board model, pseudo-legal move generation and a
//! click-driven turn controller.
//!
//! Capturing the opposing king wins. There is no check detection, castling,
//! en passant or promotion.

/// Debug-level log line, compiled in only with the `logging` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! trace_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)+);
    };
}

/// Info-level log line, compiled in only with the `logging` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! trace_info {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        ::log::info!($($arg)+);
    };
}

pub mod board;
pub mod cli;
pub mod game;

pub use board::{valid_moves, Board, Color, MoveList, Piece, PieceKind, Square};
pub use game::{Effect, GameSession, GameStatus, SessionConfig};

#[cfg(all(test, feature = "logging"))]
mod tests {
    use crate::board::Square;
    use crate::game::GameSession;

    #[test]
    fn test_trace_macros_with_logging() {
        let moves = 2;
        crate::trace_debug!("{moves} moves");
        crate::trace_info!("reset after {} moves", moves);

        let mut game = GameSession::new();
        game.on_square_selected(Square(6, 4));
        game.on_square_selected(Square(4, 4));
        game.reset();
        assert_eq!(game.current_player(), crate::Color::White);
    }
}
