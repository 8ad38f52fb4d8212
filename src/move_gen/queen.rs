//! Queen move generation

use crate::board::Board;
use crate::move_gen::sliding::{slide, DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::move_gen::GeneratedMoves;
use crate::types::Piece;

/// The queen is the union of rook and bishop rays
pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    slide(piece, board, pieces, &ORTHOGONAL_DIRS, out);
    slide(piece, board, pieces, &DIAGONAL_DIRS, out);
}
