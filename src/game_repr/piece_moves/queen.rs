use crate::game_repr::{Piece, Position};

use super::Destinations;

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, piece: &Piece, moves: &mut Destinations) {
        self.bishop_moves_into(piece, moves);
        self.rook_moves_into(piece, moves);
    }
}
