//! Check, checkmate and game termination
//!
//! Check detection regenerates the opposing pieces' attacks against the
//! current board; checkmate runs a full one-ply search over the checked
//! color's moves and attacks, simulating each with the same apply/revert
//! bookkeeping as a real move. Both use the pure generation path, so no
//! piece's cached sets change while probing.

use crate::api::game::Game;
use crate::move_gen;
use crate::types::{PieceColor, PieceId};
use tracing::debug;

/// Where the controller is within the current turn
///
/// `GameOver` is terminal: once checkmate is detected no further selection
/// is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Waiting for the active player to grab a piece
    #[default]
    WaitingForSelection,
    /// A piece is grabbed; the next placement resolves it
    PieceSelected,
    /// Checkmate was delivered; input is refused
    GameOver,
}

impl TurnPhase {
    /// Check if this phase still accepts player input
    pub fn accepts_input(&self) -> bool {
        matches!(self, TurnPhase::WaitingForSelection | TurnPhase::PieceSelected)
    }
}

/// Terminal result of the game
///
/// Starts as `Playing` and transitions once, when checkmate is delivered.
/// Draw results are out of scope for this engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameOverState {
    #[default]
    Playing,
    /// White delivered checkmate
    WhiteWon,
    /// Black delivered checkmate
    BlackWon,
}

impl GameOverState {
    pub(crate) fn win_for(color: PieceColor) -> Self {
        match color {
            PieceColor::White => GameOverState::WhiteWon,
            PieceColor::Black => GameOverState::BlackWon,
        }
    }

    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Winner of the game, if there is one
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
            GameOverState::Playing => None,
        }
    }

    /// Human-readable result message for the presentation layer
    pub fn message(&self) -> &str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
        }
    }
}

impl Game {
    /// Check whether `color`'s king is currently under attack
    ///
    /// Regenerates every opposing active piece's attacks against the
    /// current board. Cost is bounded by the number of opposing pieces
    /// times their ray lengths, well under a thousand tile evaluations.
    pub fn is_player_in_check(&self, color: PieceColor) -> bool {
        self.active_pieces()
            .filter(|piece| piece.color != color)
            .any(|piece| move_gen::generate(piece, &self.board, &self.pieces).threatens_king)
    }

    /// Check whether `color` is checkmated
    ///
    /// Returns false immediately when `color` is not in check. Otherwise
    /// every move and attack of every active piece of `color` is simulated;
    /// checkmate holds only if none of them escapes the check. Each
    /// simulation is fully reverted before the next one runs.
    pub fn is_checkmate(&mut self, color: PieceColor) -> bool {
        if !self.is_player_in_check(color) {
            return false;
        }

        let candidates: Vec<PieceId> = self
            .active_pieces()
            .filter(|piece| piece.color == color)
            .map(|piece| piece.id)
            .collect();

        for id in candidates {
            let generated =
                move_gen::generate(&self.pieces[id.index()], &self.board, &self.pieces);

            for dest in generated.moves {
                if !self.leaves_king_in_check(id, dest, None, color) {
                    debug!(
                        "[GAME] {:?} escapes check: {} -> {dest}",
                        color, self.pieces[id.index()].tile
                    );
                    return false;
                }
            }
            for dest in generated.attacks {
                if let Some(victim) = self.board.piece_at(dest) {
                    if !self.leaves_king_in_check(id, dest, Some((victim, dest)), color) {
                        debug!(
                            "[GAME] {:?} escapes check by capture: {} -> {dest}",
                            color, self.pieces[id.index()].tile
                        );
                        return false;
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Tile};

    #[test]
    fn test_turn_phase_accepts_input() {
        assert!(TurnPhase::WaitingForSelection.accepts_input());
        assert!(TurnPhase::PieceSelected.accepts_input());
        assert!(!TurnPhase::GameOver.accepts_input());
    }

    #[test]
    fn test_game_over_state_default_is_playing() {
        let state = GameOverState::default();
        assert_eq!(state, GameOverState::Playing);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_game_over_state_winners() {
        assert_eq!(GameOverState::WhiteWon.winner(), Some(PieceColor::White));
        assert_eq!(GameOverState::BlackWon.winner(), Some(PieceColor::Black));
        assert!(GameOverState::WhiteWon.is_game_over());
        assert!(GameOverState::BlackWon.is_game_over());
    }

    #[test]
    fn test_game_over_state_messages() {
        assert_eq!(GameOverState::Playing.message(), "Game in progress");
        assert_eq!(GameOverState::WhiteWon.message(), "White wins by checkmate!");
        assert_eq!(GameOverState::BlackWon.message(), "Black wins by checkmate!");
    }

    #[test]
    fn test_rook_on_open_file_gives_check() {
        let game = Game::from_setup(&[
            (PieceKind::King, PieceColor::White, Tile::new(4, 0)),
            (PieceKind::Rook, PieceColor::Black, Tile::new(4, 7)),
        ])
        .unwrap();

        assert!(game.is_player_in_check(PieceColor::White));
        assert!(!game.is_player_in_check(PieceColor::Black));
    }

    #[test]
    fn test_blocked_rook_gives_no_check() {
        let game = Game::from_setup(&[
            (PieceKind::King, PieceColor::White, Tile::new(4, 0)),
            (PieceKind::Pawn, PieceColor::White, Tile::new(4, 3)),
            (PieceKind::Rook, PieceColor::Black, Tile::new(4, 7)),
        ])
        .unwrap();

        assert!(
            !game.is_player_in_check(PieceColor::White),
            "own pawn blocks the rook's file"
        );
    }

    #[test]
    fn test_checkmate_requires_check() {
        let mut game = Game::from_setup(&[
            (PieceKind::King, PieceColor::White, Tile::new(4, 0)),
            (PieceKind::Rook, PieceColor::Black, Tile::new(0, 7)),
        ])
        .unwrap();

        assert!(
            !game.is_checkmate(PieceColor::White),
            "not in check, so never checkmate"
        );
    }
}
