//! Pawn move generation
//!
//! Pawns never use the shared candidate rule: their pushes and captures are
//! different squares. Handled here:
//! - Single forward push onto an empty tile
//! - Double push when both tiles are empty and the pawn has not yet moved
//! - Diagonal captures onto enemy-occupied tiles only
//!
//! An empty diagonal is never a move or an attack; en passant is decided by
//! the controller from the opposing pawn's double-step window, not here.

use crate::board::Board;
use crate::move_gen::GeneratedMoves;
use crate::types::{Piece, PieceKind};

pub(crate) fn generate(piece: &Piece, board: &Board, pieces: &[Piece], out: &mut GeneratedMoves) {
    let dir = piece.color.pawn_direction();

    // Forward pushes, gated on the single-step tile being free
    let one_step = piece.tile.offset(0, dir);
    if one_step.on_board() && !board.is_occupied(one_step) {
        out.moves.push(one_step);

        let two_step = piece.tile.offset(0, 2 * dir);
        if !piece.has_moved && two_step.on_board() && !board.is_occupied(two_step) {
            out.moves.push(two_step);
        }
    }

    // Diagonal captures
    for dc in [-1, 1] {
        let diagonal = piece.tile.offset(dc, dir);
        if !diagonal.on_board() {
            continue;
        }
        if let Some(id) = board.piece_at(diagonal) {
            let occupant = &pieces[id.index()];
            if occupant.color != piece.color {
                out.attacks.push(diagonal);
                if occupant.kind == PieceKind::King {
                    out.threatens_king = true;
                }
            }
        }
    }
}
