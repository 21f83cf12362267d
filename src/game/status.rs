use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Whether the game is still running.
///
/// Moves from `Playing` to `Won` exactly once per game, when a king is
/// captured. Only a reset returns it to `Playing`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    #[default]
    Playing,
    Won(Color),
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won(color) => Some(color),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Won(color) => write!(f, "{color} wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_status_text() {
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(GameStatus::Won(Color::White).to_string(), "white wins");
        assert_eq!(GameStatus::Won(Color::Black).to_string(), "black wins");
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameStatus::default(), GameStatus::Playing);
        assert!(!GameStatus::Playing.is_over());
        assert_eq!(GameStatus::Won(Color::Black).winner(), Some(Color::Black));
        assert!(GameStatus::Won(Color::Black).is_over());
    }
}
