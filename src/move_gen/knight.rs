//! Knight move generation
//!
//! Knights jump directly to eight fixed offsets; intervening pieces do not
//! block, so each candidate is evaluated independently.

use crate::board::Board;
use crate::move_gen::{evaluate_candidate, GeneratedMoves};
use crate::types::Piece;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    for &(dc, dr) in &KNIGHT_OFFSETS {
        evaluate_candidate(piece.tile.offset(dc, dr), piece, board, pieces, out);
    }
}
