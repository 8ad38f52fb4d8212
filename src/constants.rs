//! Board setup and piece value constants

use crate::types::{PieceColor, PieceKind};

/// Tiles per board side
pub const TILE_COUNT: i8 = 8;

/// Back-rank layout shared by both colors; the king sits on column 3
pub const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding a color's back rank at game start
pub const fn back_row(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => 0,
        PieceColor::Black => 7,
    }
}

/// Row holding a color's pawns at game start
pub const fn pawn_row(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => 1,
        PieceColor::Black => 6,
    }
}

/// Material value of a piece in pawn units
///
/// King has no material value since it cannot be captured.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
