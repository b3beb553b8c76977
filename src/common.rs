//! Common types: the crate-wide error enum shared by the grid, registry,
//! placement and game modules.

use std::error::Error;
use std::fmt;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size is not a positive integer.
    InvalidSize(usize),
    /// An external definition file is missing.
    SourceNotFound(String),
    /// A record in an external source could not be parsed.
    Format(String),
    /// Coordinate outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Custom placement targets a cell that is already occupied.
    InvalidPlacement(String),
    /// Custom placement has no entry for a ship.
    MissingPlacement(String),
    /// Random placement ran out of attempts.
    PlacementExhausted { ship: String, attempts: usize },
    /// Fleet placement attempted for a side that already has ships.
    AlreadyPlaced,
    /// A turn was played before both fleets were placed.
    PlacementPending,
    /// A turn was played after the game already finished.
    AlreadyFinished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSize(size) => {
                write!(f, "board size must be a positive integer, got {}", size)
            }
            GameError::SourceNotFound(path) => write!(f, "file not found: {}", path),
            GameError::Format(msg) => write!(f, "malformed record: {}", msg),
            GameError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the grid", x, y)
            }
            GameError::InvalidPlacement(ship) => {
                write!(f, "invalid placement for {}: target cell occupied", ship)
            }
            GameError::MissingPlacement(ship) => {
                write!(f, "no placement entry for {}", ship)
            }
            GameError::PlacementExhausted { ship, attempts } => {
                write!(f, "unable to place {} after {} attempts", ship, attempts)
            }
            GameError::AlreadyPlaced => write!(f, "fleet is already placed for that side"),
            GameError::PlacementPending => {
                write!(f, "cannot play a turn before both fleets are placed")
            }
            GameError::AlreadyFinished => write!(f, "the game is already finished"),
        }
    }
}

impl Error for GameError {}
