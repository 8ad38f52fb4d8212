//! Move and attack generation
//!
//! One submodule per piece kind, dispatched by [`generate`]. Generation is
//! pure: it reads a board snapshot and returns the derived sets without
//! touching any cache, so check probing during move simulation leaves every
//! piece untouched. The controller copies the result into a piece's cached
//! `valid_moves`/`valid_attacks` when it needs them to persist.
//!
//! All kinds except the pawn share one candidate-evaluation rule,
//! [`evaluate_candidate`]: off-board or friendly tiles are rejected, enemy
//! tiles become attacks, empty tiles become moves, and sliding pieces keep
//! extending a ray only while candidates stay empty.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::board::Board;
use crate::types::{Piece, PieceKind, Tile};

/// Result of one generation pass over a piece
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedMoves {
    /// Empty reachable tiles
    pub moves: Vec<Tile>,
    /// Enemy-occupied reachable tiles
    pub attacks: Vec<Tile>,
    /// True when one of the attacks lands on the enemy king
    pub threatens_king: bool,
}

/// Whether a sliding ray may continue past the evaluated candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Candidate {
    Open,
    Blocked,
}

/// Evaluate one candidate destination against the board
///
/// Appends to `out` according to the shared rule and reports whether a
/// sliding ray continues. Non-sliding pieces evaluate each candidate
/// independently and ignore the returned status.
pub(crate) fn evaluate_candidate(
    tile: Tile,
    piece: &Piece,
    board: &Board,
    pieces: &[Piece],
    out: &mut GeneratedMoves,
) -> Candidate {
    if !tile.on_board() {
        return Candidate::Blocked;
    }
    match board.piece_at(tile) {
        None => {
            out.moves.push(tile);
            Candidate::Open
        }
        Some(id) => {
            let occupant = &pieces[id.index()];
            if occupant.color != piece.color {
                out.attacks.push(tile);
                if occupant.kind == PieceKind::King {
                    out.threatens_king = true;
                }
            }
            Candidate::Blocked
        }
    }
}

/// Recompute a piece's valid moves and attacks from scratch
pub fn generate(piece: &Piece, board: &Board, pieces: &[Piece]) -> GeneratedMoves {
    let mut out = GeneratedMoves::default();
    match piece.kind {
        PieceKind::Pawn => pawn::generate(piece, board, pieces, &mut out),
        PieceKind::Rook => rook::generate(piece, board, pieces, &mut out),
        PieceKind::Knight => knight::generate(piece, board, pieces, &mut out),
        PieceKind::Bishop => bishop::generate(piece, board, pieces, &mut out),
        PieceKind::King => king::generate(piece, board, pieces, &mut out),
        PieceKind::Queen => queen::generate(piece, board, pieces, &mut out),
    }
    out
}
