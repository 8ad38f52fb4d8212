//! Board occupancy ledger
//!
//! Maps tiles to piece ids and nothing more: no turns, no colors, no
//! legality. Invariant: at most one piece per tile, and the controller keeps
//! each piece's `tile` field mirrored with this map after every mutation.

use crate::error::{BoardError, BoardResult};
use crate::types::{PieceId, Tile};

/// Occupancy grid mapping each tile to at most one piece id
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: [[Option<PieceId>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Board {
            tiles: [[None; 8]; 8],
        }
    }

    /// Piece occupying the tile, if any
    pub fn piece_at(&self, tile: Tile) -> Option<PieceId> {
        if !tile.on_board() {
            return None;
        }
        self.tiles[tile.row as usize][tile.col as usize]
    }

    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.piece_at(tile).is_some()
    }

    /// Put a piece on a free tile
    ///
    /// Used for initial placement and for restoring a captured piece during
    /// rollback. An occupied target breaks the occupancy invariant and is
    /// reported as an error.
    pub fn place(&mut self, id: PieceId, tile: Tile) -> BoardResult<()> {
        if !tile.on_board() {
            return Err(BoardError::OutOfRange { tile });
        }
        if self.is_occupied(tile) {
            return Err(BoardError::TileOccupied { tile });
        }
        self.tiles[tile.row as usize][tile.col as usize] = Some(id);
        Ok(())
    }

    /// Move a piece between tiles, clearing `from` and setting `to`
    ///
    /// The caller guarantees the destination is unoccupied; the board does
    /// no legality checking.
    pub fn relocate(&mut self, id: PieceId, from: Tile, to: Tile) {
        debug_assert_eq!(self.piece_at(from), Some(id));
        debug_assert!(!self.is_occupied(to));
        self.tiles[from.row as usize][from.col as usize] = None;
        self.tiles[to.row as usize][to.col as usize] = Some(id);
    }

    /// Clear a tile, returning the piece that occupied it
    pub fn lift(&mut self, tile: Tile) -> Option<PieceId> {
        if !tile.on_board() {
            return None;
        }
        self.tiles[tile.row as usize][tile.col as usize].take()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                assert!(!board.is_occupied(Tile::new(col, row)));
            }
        }
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new();
        let tile = Tile::new(3, 4);
        board.place(PieceId(0), tile).unwrap();

        assert_eq!(board.piece_at(tile), Some(PieceId(0)));
        assert!(board.is_occupied(tile));
        assert!(!board.is_occupied(Tile::new(4, 3)), "only (3,4) is occupied");
    }

    #[test]
    fn test_place_on_occupied_tile_fails() {
        let mut board = Board::new();
        let tile = Tile::new(0, 0);
        board.place(PieceId(0), tile).unwrap();

        assert!(matches!(
            board.place(PieceId(1), tile),
            Err(BoardError::TileOccupied { .. })
        ));
        assert_eq!(board.piece_at(tile), Some(PieceId(0)), "occupant unchanged");
    }

    #[test]
    fn test_place_off_board_fails() {
        let mut board = Board::new();
        assert!(matches!(
            board.place(PieceId(0), Tile::new(8, 0)),
            Err(BoardError::OutOfRange { .. })
        ));
        assert!(matches!(
            board.place(PieceId(0), Tile::new(0, -1)),
            Err(BoardError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_relocate_clears_source_and_sets_destination() {
        let mut board = Board::new();
        let from = Tile::new(4, 1);
        let to = Tile::new(4, 3);
        board.place(PieceId(7), from).unwrap();

        board.relocate(PieceId(7), from, to);

        assert_eq!(board.piece_at(from), None, "source should be cleared");
        assert_eq!(board.piece_at(to), Some(PieceId(7)));
    }

    #[test]
    fn test_lift_returns_occupant() {
        let mut board = Board::new();
        let tile = Tile::new(2, 2);
        board.place(PieceId(5), tile).unwrap();

        assert_eq!(board.lift(tile), Some(PieceId(5)));
        assert!(!board.is_occupied(tile));
        assert_eq!(board.lift(tile), None, "second lift finds nothing");
    }

    #[test]
    fn test_off_board_queries_return_none() {
        let board = Board::new();
        assert_eq!(board.piece_at(Tile::new(-1, 0)), None);
        assert_eq!(board.piece_at(Tile::new(0, 8)), None);
    }
}
