//! Chess piece asset table
//!
//! Static mapping from (color, piece type) to what a display surface needs
//! to draw that piece: a texture path for graphical front ends and glyphs
//! for text ones. The rules engine never reads this table; it is handed to
//! presentation only.
//!
//! # Usage
//!
//! ```
//! use chess_rules::assets::piece_asset;
//! use chess_rules::game_repr::{Color, Type};
//!
//! let asset = piece_asset(Color::White, Type::King).unwrap();
//! assert_eq!(asset.texture, "assets/texture/pieces/w_king.png");
//! assert_eq!(asset.ascii, 'K');
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::game_repr::{Color, Piece, Type};

/// Drawing data for one kind of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceAsset {
    pub texture: &'static str,
    /// Upper case for White, lower case for Black
    pub ascii: char,
    pub unicode: char,
}

static PIECE_ASSETS: LazyLock<HashMap<(Color, Type), PieceAsset>> = LazyLock::new(|| {
    let entries = [
        (Color::White, Type::Pawn, "assets/texture/pieces/w_pawn.png", 'P', '♙'),
        (Color::White, Type::Knight, "assets/texture/pieces/w_knight.png", 'N', '♘'),
        (Color::White, Type::Bishop, "assets/texture/pieces/w_bishop.png", 'B', '♗'),
        (Color::White, Type::Rook, "assets/texture/pieces/w_rook.png", 'R', '♖'),
        (Color::White, Type::Queen, "assets/texture/pieces/w_queen.png", 'Q', '♕'),
        (Color::White, Type::King, "assets/texture/pieces/w_king.png", 'K', '♔'),
        (Color::Black, Type::Pawn, "assets/texture/pieces/b_pawn.png", 'p', '♟'),
        (Color::Black, Type::Knight, "assets/texture/pieces/b_knight.png", 'n', '♞'),
        (Color::Black, Type::Bishop, "assets/texture/pieces/b_bishop.png", 'b', '♝'),
        (Color::Black, Type::Rook, "assets/texture/pieces/b_rook.png", 'r', '♜'),
        (Color::Black, Type::Queen, "assets/texture/pieces/b_queen.png", 'q', '♛'),
        (Color::Black, Type::King, "assets/texture/pieces/b_king.png", 'k', '♚'),
    ];

    entries
        .into_iter()
        .map(|(color, piece_type, texture, ascii, unicode)| {
            ((color, piece_type), PieceAsset { texture, ascii, unicode })
        })
        .collect()
});

/// Returns the drawing data for a kind of piece.
pub fn piece_asset(color: Color, piece_type: Type) -> Option<&'static PieceAsset> {
    PIECE_ASSETS.get(&(color, piece_type))
}

/// Character used to draw `piece` on a text board.
pub fn glyph(piece: &Piece, unicode: bool) -> char {
    match piece_asset(piece.color, piece.piece_type) {
        Some(asset) if unicode => asset.unicode,
        Some(asset) => asset.ascii,
        None => piece.piece_type.letter(),
    }
}
