//! Sliding piece move generation
//!
//! Common functionality for bishops, rooks and queens. A ray extends one
//! tile at a time from the piece's position and stops at the first tile
//! that is off-board, friendly, or an enemy (the enemy tile itself is kept
//! as a capture).

use crate::board::Board;
use crate::move_gen::{evaluate_candidate, Candidate, GeneratedMoves};
use crate::types::Piece;

/// The four orthogonal ray directions
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal ray directions
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray until the shared candidate rule blocks it
pub(crate) fn slide(
    piece: &Piece,
    board: &Board,
    pieces: &[Piece],
    dirs: &[(i8, i8)],
    out: &mut GeneratedMoves,
) {
    for &(dc, dr) in dirs {
        let mut tile = piece.tile.offset(dc, dr);
        while evaluate_candidate(tile, piece, board, pieces, out) == Candidate::Open {
            tile = tile.offset(dc, dr);
        }
    }
}
