//! Common types: board and coordinate errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipKind;

/// Errors returned by grid, placement and fleet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate outside the 10×12 grid.
    OutOfBounds { row: usize, col: usize },
    /// Orientation is not one the ship kind can take.
    UnsupportedOrientation,
    /// Some cell of the ship would fall off the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// The same ship kind appears twice in a layout.
    DuplicateShip(ShipKind),
    /// Rejection sampling ran out of attempts.
    PlacementFailed { kind: ShipKind, attempts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::BitBoard(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::UnsupportedOrientation => {
                write!(f, "Orientation is not supported by this ship")
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::DuplicateShip(kind) => write!(f, "{} is placed more than once", kind),
            BoardError::PlacementFailed { kind, attempts } => {
                write!(f, "Unable to place {} after {} attempts", kind, attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors from parsing a player's target such as `6G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input is not exactly two characters.
    WrongLength,
    /// First character is not a row digit.
    InvalidRow,
    /// Second character is not a column letter A-L.
    InvalidColumnLetter(char),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::WrongLength => write!(f, "Please enter exactly two characters."),
            CoordError::InvalidRow => write!(f, "Row must be a digit from 0 to 9."),
            CoordError::InvalidColumnLetter(c) => {
                write!(f, "'{}' is not a column; use a letter from A to L.", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
