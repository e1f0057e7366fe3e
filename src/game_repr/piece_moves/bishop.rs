use crate::game_repr::tables::DIAGONAL;
use crate::game_repr::{Piece, Position};

use super::Destinations;

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, piece: &Piece, moves: &mut Destinations) {
        self.slide_into(piece, &DIAGONAL, moves);
    }
}
