//! Rook move generation

use crate::board::Board;
use crate::move_gen::sliding::{slide, ORTHOGONAL_DIRS};
use crate::move_gen::GeneratedMoves;
use crate::types::Piece;

/// Rooks slide along the four orthogonal rays
pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    slide(piece, board, pieces, &ORTHOGONAL_DIRS, out);
}
