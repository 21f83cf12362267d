//! Square type and coordinate conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's (rank 1).
/// Column 0 is the a-file. Outside this crate a `Square` can only be built
/// through [`Square::new`], `TryFrom<(usize, usize)>` or `FromStr`, so every
/// value indexes the grid safely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(pub(crate) usize, pub(crate) usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by a signed delta, returning `None` once the target leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Iterate over all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }

    /// True for squares drawn light on a standard board (a8 is light).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.0 + self.1) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.1 as u8 + b'a') as char,
            BOARD_SIZE - self.0
        )
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation such as `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => BOARD_SIZE - (r - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
