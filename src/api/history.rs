//! Move history tracking
//!
//! Maintains a chronological record of every committed move so the
//! presentation layer can display the game afterwards or ship it over the
//! wire. Records store tiles, not notation.

use crate::types::{PieceColor, PieceKind, Tile};
use serde::{Deserialize, Serialize};

/// One committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub from: Tile,
    pub to: Tile,
    /// Kind of the captured piece, if the move was a capture
    pub captured: Option<PieceKind>,
    pub is_en_passant: bool,
    /// Whether the move put the opponent in check
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Chronological list of all moves made since game start
///
/// Index 0 is White's first move, index 1 Black's response, and so on.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
