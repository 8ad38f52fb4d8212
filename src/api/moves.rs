//! Move placement and execution
//!
//! `place_piece` is the only rule-checked, state-mutating entry point
//! besides selection. Every candidate move is applied provisionally with
//! [`Game::apply_move`] and committed only if the mover's own king is not
//! left under attack; otherwise [`Game::revert_move`] restores the exact
//! prior state, captures included. The same apply/revert pair drives
//! checkmate simulation, so simulated and real moves share one set of
//! bookkeeping.

use crate::api::game::Game;
use crate::api::history::MoveRecord;
use crate::api::state::{GameOverState, TurnPhase};
use crate::types::{PieceColor, PieceId, PieceKind, Tile};
use tracing::{debug, error, info};

/// Everything needed to restore the game after a provisional move
pub(crate) struct UndoMove {
    pub piece: PieceId,
    pub from: Tile,
    pub to: Tile,
    /// Captured piece and the tile it stood on; for en passant that tile is
    /// not the move's destination
    pub captured: Option<(PieceId, Tile)>,
    pub had_moved: bool,
    pub en_passant_ply: Option<u32>,
}

impl Game {
    /// Drop the selected piece on `tile`
    ///
    /// Only meaningful in `PieceSelected`; always ends with the selection
    /// cleared. A rejected move snaps the piece back to its pre-selection
    /// tile and changes nothing else; a committed move increments the ply
    /// counter, flips the active color and evaluates check and checkmate
    /// for the new active color.
    pub fn place_piece(&mut self, tile: Tile) {
        let Some(selection) = self.selection.take() else {
            return;
        };
        self.phase = TurnPhase::WaitingForSelection;

        let mover = selection.piece;
        let origin = selection.origin;
        let mover_color = self.pieces[mover.index()].color;
        let mover_kind = self.pieces[mover.index()].kind;

        if !tile.on_board() {
            debug!("[GAME] Destination {tile} is off the board, snapping back to {origin}");
            return;
        }

        // Decide between plain move, capture and en passant before touching
        // any state
        let capture = if let Some(occupant) = self.board.piece_at(tile) {
            if self.pieces[occupant.index()].color == mover_color {
                // Quiet no-op rather than an error
                // TODO: Castling
                debug!("[GAME] Destination {tile} holds a friendly piece, move ignored");
                return;
            }
            if !self.pieces[mover.index()].valid_attacks.contains(&tile) {
                debug!("[GAME] {tile} is not a valid attack, snapping back to {origin}");
                return;
            }
            Some((occupant, tile))
        } else if let Some(victim) = self.en_passant_victim(mover, tile) {
            Some((victim, self.pieces[victim.index()].tile))
        } else if self.pieces[mover.index()].valid_moves.contains(&tile) {
            None
        } else {
            debug!("[GAME] {tile} is not a valid move, snapping back to {origin}");
            return;
        };

        let undo = self.apply_move(mover, tile, capture);
        if self.is_player_in_check(mover_color) {
            self.revert_move(undo);
            debug!("[GAME] Move would leave the {mover_color:?} king in check, snapping back");
            return;
        }

        // Committed
        let captured_kind = capture.map(|(victim, _)| self.pieces[victim.index()].kind);
        let is_en_passant = matches!(capture, Some((_, victim_tile)) if victim_tile != tile);
        self.active_color = mover_color.opposite();
        self.in_check = self.is_player_in_check(self.active_color);
        let is_checkmate = self.in_check && self.is_checkmate(self.active_color);

        self.history.add_move(MoveRecord {
            kind: mover_kind,
            color: mover_color,
            from: origin,
            to: tile,
            captured: captured_kind,
            is_en_passant,
            is_check: self.in_check,
            is_checkmate,
        });
        info!(
            "[GAME] {mover_color:?} {mover_kind:?} {origin} -> {tile}{}, ply {}",
            match captured_kind {
                Some(kind) if is_en_passant => format!(" takes {kind:?} en passant"),
                Some(kind) => format!(" takes {kind:?}"),
                None => String::new(),
            },
            self.ply
        );

        if is_checkmate {
            self.game_over = GameOverState::win_for(mover_color);
            self.phase = TurnPhase::GameOver;
            info!("[GAME] ========== CHECKMATE ==========");
            info!("[GAME] {}", self.game_over.message());
        } else if self.in_check {
            info!("[GAME] {:?} king is in check", self.active_color);
        }
    }

    /// Find the pawn captured en passant by moving `mover` to `dest`
    ///
    /// The destination must be empty and match the selected pawn's capture
    /// shape, and the tile directly behind it (in the mover's direction)
    /// must hold an enemy pawn whose double-step window is still open.
    fn en_passant_victim(&self, mover: PieceId, dest: Tile) -> Option<PieceId> {
        let piece = &self.pieces[mover.index()];
        if piece.kind != PieceKind::Pawn {
            return None;
        }
        let dir = piece.color.pawn_direction();
        if dest.row - piece.tile.row != dir || (dest.col - piece.tile.col).abs() != 1 {
            return None;
        }
        let behind = dest.offset(0, -dir);
        let occupant_id = self.board.piece_at(behind)?;
        let occupant = &self.pieces[occupant_id.index()];
        let capturable = occupant.kind == PieceKind::Pawn
            && occupant.color != piece.color
            && occupant.en_passant_window_open(self.ply);
        capturable.then_some(occupant_id)
    }

    /// Apply a provisional move, returning what is needed to revert it
    ///
    /// Bookkeeping is identical for real and simulated moves: capture goes
    /// to the captured set, the mover's tile, first-move flag and en
    /// passant marker are updated, and the ply counter is incremented.
    pub(crate) fn apply_move(
        &mut self,
        id: PieceId,
        dest: Tile,
        capture: Option<(PieceId, Tile)>,
    ) -> UndoMove {
        let from = self.pieces[id.index()].tile;
        let undo = UndoMove {
            piece: id,
            from,
            to: dest,
            captured: capture,
            had_moved: self.pieces[id.index()].has_moved,
            en_passant_ply: self.pieces[id.index()].en_passant_ply,
        };

        if let Some((victim, victim_tile)) = capture {
            self.board.lift(victim_tile);
            self.captured.push(victim);
        }
        self.board.relocate(id, from, dest);

        let double_step = self.pieces[id.index()].kind == PieceKind::Pawn
            && (dest.row - from.row).abs() == 2;
        let registered_ply = self.ply;
        let piece = &mut self.pieces[id.index()];
        piece.tile = dest;
        piece.has_moved = true;
        // A double-step opens the window for the very next ply; any other
        // move by this pawn clears a stale marker
        piece.en_passant_ply = double_step.then_some(registered_ply);
        self.ply += 1;

        undo
    }

    /// Undo a provisional move, restoring the exact prior state
    pub(crate) fn revert_move(&mut self, undo: UndoMove) {
        self.ply -= 1;
        self.board.relocate(undo.piece, undo.to, undo.from);
        let piece = &mut self.pieces[undo.piece.index()];
        piece.tile = undo.from;
        piece.has_moved = undo.had_moved;
        piece.en_passant_ply = undo.en_passant_ply;

        if let Some((victim, victim_tile)) = undo.captured {
            let restored = self.captured.pop();
            debug_assert_eq!(restored, Some(victim));
            if let Err(err) = self.board.place(victim, victim_tile) {
                // A failed rollback corrupts every later evaluation
                error!("[GAME] Rollback failed to restore captured piece {victim}: {err}");
                #[cfg(debug_assertions)]
                panic!("rollback failed to restore captured piece {victim}: {err}");
            }
        }
    }

    /// Simulate a move and report whether it leaves `color`'s own king
    /// under attack
    ///
    /// The board and every piece are restored before returning, whatever
    /// the outcome.
    pub(crate) fn leaves_king_in_check(
        &mut self,
        id: PieceId,
        dest: Tile,
        capture: Option<(PieceId, Tile)>,
        color: PieceColor,
    ) -> bool {
        let undo = self.apply_move(id, dest, capture);
        let in_check = self.is_player_in_check(color);
        self.revert_move(undo);
        in_check
    }
}
