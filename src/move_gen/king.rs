//! King move generation
//!
//! One step in any of the eight directions, each candidate evaluated
//! independently. Leaving the king exposed is not this module's concern;
//! the controller rejects self-check when a move is placed.

use crate::board::Board;
use crate::move_gen::{evaluate_candidate, GeneratedMoves};
use crate::types::Piece;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    for &(dc, dr) in &KING_OFFSETS {
        evaluate_candidate(piece.tile.offset(dc, dr), piece, board, pieces, out);
    }

    // TODO: Castling
}
