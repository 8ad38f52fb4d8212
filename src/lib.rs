//! Two-player chess rules engine
//!
//! Implements the board model, per-piece move and attack generation, and the
//! turn controller for a two-player game: selection, placement, self-check
//! prohibition, en passant, and check/checkmate detection via one-ply move
//! simulation. Pure game logic without any rendering or input coupling, so
//! the presentation layer only exchanges tile coordinates and piece state
//! with this crate.
//!
//! # Module Structure
//!
//! - `types` - Tiles, colors, piece kinds and the piece arena entries
//! - `board` - Occupancy ledger mapping tiles to piece ids
//! - `move_gen` - Movement and attack rules for each piece kind
//! - `api` - The `Game` turn controller and its state types
//!
//! # Architecture
//!
//! Pieces live in an arena owned by [`Game`] and are addressed by a stable
//! [`PieceId`]; the [`Board`] only maps tiles to ids. All movement and query
//! functions take the board explicitly, so there are no back-references from
//! pieces to shared mutable state.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;

pub use api::game::Game;
pub use api::history::{MoveHistory, MoveRecord};
pub use api::state::{GameOverState, TurnPhase};
pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use move_gen::GeneratedMoves;
pub use types::{Piece, PieceColor, PieceId, PieceKind, Tile};
