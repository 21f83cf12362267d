//! Error types for board operations.

use std::fmt;

/// Error type for raw-coordinate board access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 8x8 grid
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) is off the board (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for square conversion and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for placement string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 squares
    WrongRowLength { row: usize, squares: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::WrongRowLength { row, squares } => {
                write!(f, "Row {row} describes {squares} squares, expected 8")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
