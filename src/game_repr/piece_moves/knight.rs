use crate::game_repr::tables::KNIGHT_OFFSETS;
use crate::game_repr::{Piece, Position};

use super::Destinations;

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, piece: &Piece, moves: &mut Destinations) {
        let Some(from) = piece.square else {
            return;
        };

        for (df, dr) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            // Can't capture own pieces
            if self.piece_at(to).is_some_and(|p| p.is(piece.color)) {
                continue;
            }
            moves.push(to);
        }
    }
}
