//! Core types for the rules engine
//!
//! Defines the tile coordinate value type, the closed set of piece kinds,
//! and the arena entry for a piece. The piece carries two derived sets,
//! `valid_moves` and `valid_attacks`, which are caches recomputed from
//! scratch by move generation; they are only trusted immediately after a
//! recompute.

use crate::constants::TILE_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate as (column, row), each valid in `[0, 8)`
///
/// A pure value with no object identity. Tiles produced by [`Tile::offset`]
/// may lie outside the board; callers filter with [`Tile::on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub col: i8,
    pub row: i8,
}

impl Tile {
    pub const fn new(col: i8, row: i8) -> Self {
        Tile { col, row }
    }

    /// Tile shifted by the given column/row deltas, without bounds checking
    pub fn offset(self, dc: i8, dr: i8) -> Tile {
        Tile {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Check if the tile lies within board bounds
    pub fn on_board(self) -> bool {
        self.col >= 0 && self.col < TILE_COUNT && self.row >= 0 && self.row < TILE_COUNT
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Piece color, White moves first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row direction pawns of this color advance in
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }
}

/// The closed set of piece kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

/// Stable arena index for a piece
///
/// Ids are handed out at construction and never invalidated; a captured
/// piece keeps its id so it can be restored during move simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chess piece in the game arena
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    /// Current tile; mirrored by the board's occupancy map
    pub tile: Tile,
    /// Set after the piece's first committed move (pawn double-step gating)
    pub has_moved: bool,
    /// Empty reachable tiles, recomputed by move generation
    pub valid_moves: Vec<Tile>,
    /// Enemy-occupied reachable tiles, recomputed by move generation
    pub valid_attacks: Vec<Tile>,
    /// Set when an attack lands on the enemy king; read by the controller
    pub threatens_king: bool,
    /// Ply counter value at double-step time; the en-passant window is open
    /// for exactly the following ply
    pub en_passant_ply: Option<u32>,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: PieceColor, tile: Tile) -> Self {
        Piece {
            id,
            kind,
            color,
            tile,
            has_moved: false,
            valid_moves: Vec::new(),
            valid_attacks: Vec::new(),
            threatens_king: false,
            en_passant_ply: None,
        }
    }

    /// Check if this pawn can still be captured en passant at the given ply
    pub fn en_passant_window_open(&self, current_ply: u32) -> bool {
        matches!(self.en_passant_ply, Some(registered) if current_ply - registered == 1)
    }
}
