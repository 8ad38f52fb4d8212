//! Game lifecycle, selection and read accessors
//!
//! The `Game` owns the board, the piece arena and all turn state. It is the
//! sole writer: pieces and board are only mutated through its methods, and
//! every public operation runs to completion before returning. The
//! presentation layer drives it with tile coordinates and reads piece state
//! back through the accessors.

use crate::api::history::MoveHistory;
use crate::api::state::{GameOverState, TurnPhase};
use crate::board::Board;
use crate::constants::{back_row, pawn_row, piece_value, BACK_ROW};
use crate::error::BoardResult;
use crate::move_gen;
use crate::types::{Piece, PieceColor, PieceId, PieceKind, Tile};
use tracing::{debug, info};

/// The single selection slot: at most one piece may be grabbed at a time
#[derive(Clone, Debug)]
pub struct Selection {
    pub piece: PieceId,
    /// Tile the piece is snapped back to when the move is rejected
    pub origin: Tile,
    /// Cosmetic pixel position while dragging; never affects rules
    pub drag_position: Option<(f32, f32)>,
}

/// Turn controller for a two-player game
pub struct Game {
    pub(crate) board: Board,
    /// Arena of all 32 pieces, indexed by `PieceId`; never shrinks
    pub(crate) pieces: Vec<Piece>,
    /// Ids of captured pieces, most recent last
    pub(crate) captured: Vec<PieceId>,
    pub(crate) selection: Option<Selection>,
    pub(crate) active_color: PieceColor,
    /// Monotonic ply counter, incremented on every committed move
    pub(crate) ply: u32,
    pub(crate) phase: TurnPhase,
    pub(crate) game_over: GameOverState,
    /// Whether the active color's king is currently under attack
    pub(crate) in_check: bool,
    pub(crate) history: MoveHistory,
}

impl Game {
    /// Create a game with all 32 pieces at their starting positions
    pub fn new() -> Self {
        let mut game = Game::empty();
        game.setup_pieces();
        info!("[GAME] New game, {} pieces placed, White to move", game.pieces.len());
        game
    }

    fn empty() -> Self {
        Game {
            board: Board::new(),
            pieces: Vec::with_capacity(32),
            captured: Vec::new(),
            selection: None,
            active_color: PieceColor::White,
            ply: 0,
            phase: TurnPhase::WaitingForSelection,
            game_over: GameOverState::Playing,
            in_check: false,
            history: MoveHistory::default(),
        }
    }

    fn setup_pieces(&mut self) {
        for color in [PieceColor::White, PieceColor::Black] {
            for (col, &kind) in BACK_ROW.iter().enumerate() {
                self.spawn_piece(kind, color, Tile::new(col as i8, back_row(color)));
            }
            for col in 0..8 {
                self.spawn_piece(PieceKind::Pawn, color, Tile::new(col, pawn_row(color)));
            }
        }
    }

    fn spawn_piece(&mut self, kind: PieceKind, color: PieceColor, tile: Tile) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.board
            .place(id, tile)
            .expect("starting layout places every piece on a distinct tile");
        self.pieces.push(Piece::new(id, kind, color, tile));
        id
    }

    /// Create a game from an explicit piece layout, White to move
    ///
    /// Used to set up constructed positions (tests, scenario replays).
    /// Fails when two pieces share a tile or a tile is out of range.
    pub fn from_setup(layout: &[(PieceKind, PieceColor, Tile)]) -> BoardResult<Self> {
        let mut game = Game::empty();
        for &(kind, color, tile) in layout {
            let id = PieceId(game.pieces.len());
            game.board.place(id, tile)?;
            game.pieces.push(Piece::new(id, kind, color, tile));
        }
        Ok(game)
    }

    /// Restart from the initial position
    pub fn reset(&mut self) {
        info!("[GAME] Game reset");
        *self = Game::new();
    }

    /// Try to grab the piece on `tile` for the active player
    ///
    /// Fails without state change when a piece is already selected, the
    /// game is over, the tile is empty, or the occupant belongs to the
    /// opponent. On success the piece's valid moves and attacks are
    /// recomputed and the controller enters `PieceSelected`.
    pub fn select_piece(&mut self, tile: Tile) -> bool {
        if self.game_over.is_game_over() {
            return false;
        }
        if self.phase == TurnPhase::PieceSelected {
            return false;
        }
        let Some(id) = self.board.piece_at(tile) else {
            debug!("[INPUT] No piece at {tile}");
            return false;
        };
        if self.pieces[id.index()].color != self.active_color {
            debug!(
                "[INPUT] Piece at {tile} belongs to {:?}, not the active player",
                self.pieces[id.index()].color
            );
            return false;
        }

        self.recompute_moves(id);
        self.selection = Some(Selection {
            piece: id,
            origin: tile,
            drag_position: None,
        });
        self.phase = TurnPhase::PieceSelected;
        let piece = &self.pieces[id.index()];
        debug!(
            "[INPUT] Selected {:?} {} at {tile}: {} moves, {} attacks",
            piece.kind,
            piece.id,
            piece.valid_moves.len(),
            piece.valid_attacks.len()
        );
        true
    }

    /// Update the dragged piece's pixel position for rendering
    ///
    /// Purely cosmetic; board and rule state are untouched.
    pub fn drag_piece(&mut self, position: (f32, f32)) {
        if let Some(selection) = self.selection.as_mut() {
            selection.drag_position = Some(position);
        }
    }

    /// Recompute and store a piece's cached move and attack sets
    pub(crate) fn recompute_moves(&mut self, id: PieceId) {
        let generated = move_gen::generate(&self.pieces[id.index()], &self.board, &self.pieces);
        let piece = &mut self.pieces[id.index()];
        piece.valid_moves = generated.moves;
        piece.valid_attacks = generated.attacks;
        piece.threatens_king = generated.threatens_king;
    }

    pub(crate) fn is_active(&self, id: PieceId) -> bool {
        !self.captured.contains(&id)
    }

    // === Read accessors for the presentation layer ===

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Pieces still on the board
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| self.is_active(p.id))
    }

    /// Pieces taken off the board, in capture order
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.captured.iter().map(|id| &self.pieces[id.index()])
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selection
            .as_ref()
            .map(|selection| &self.pieces[selection.piece.index()])
    }

    /// Pixel position of the dragged piece, if one is being dragged
    pub fn drag_position(&self) -> Option<(f32, f32)> {
        self.selection.as_ref().and_then(|s| s.drag_position)
    }

    pub fn active_color(&self) -> PieceColor {
        self.active_color
    }

    /// Plies played since game start
    pub fn turn_counter(&self) -> u32 {
        self.ply
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// Whether the active color is currently in check
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Captured material difference in pawn units, positive when White is
    /// ahead
    pub fn material_advantage(&self) -> i32 {
        self.captured_pieces()
            .map(|piece| match piece.color {
                PieceColor::Black => piece_value(piece.kind),
                PieceColor::White => -piece_value(piece.kind),
            })
            .sum()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
