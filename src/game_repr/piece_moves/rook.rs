use crate::game_repr::tables::ORTHOGONAL;
use crate::game_repr::{Piece, Position};

use super::Destinations;

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, piece: &Piece, moves: &mut Destinations) {
        self.slide_into(piece, &ORTHOGONAL, moves);
    }
}
