//! Bishop move generation

use crate::board::Board;
use crate::move_gen::sliding::{slide, DIAGONAL_DIRS};
use crate::move_gen::GeneratedMoves;
use crate::types::Piece;

/// Bishops slide along the four diagonal rays
pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    slide(piece, board, pieces, &DIAGONAL_DIRS, out);
}
