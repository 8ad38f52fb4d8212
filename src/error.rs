//! Error types for the rules engine
//!
//! Rule violations (bad selection, unreachable destination) are reported as
//! boolean outcomes by the controller, never as errors. Errors are reserved
//! for breaches of the board's internal occupancy contract.

use crate::types::Tile;
use thiserror::Error;

/// Errors that can occur when mutating board occupancy
#[derive(Error, Debug)]
pub enum BoardError {
    /// Placement onto a tile that already holds a piece
    #[error("tile {tile} is already occupied")]
    TileOccupied { tile: Tile },

    /// Tile coordinates outside the board
    #[error("tile {tile} is outside the board")]
    OutOfRange { tile: Tile },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
