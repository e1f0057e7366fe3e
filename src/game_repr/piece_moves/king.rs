use crate::game_repr::tables::KING_OFFSETS;
use crate::game_repr::{Piece, Position};

use super::Destinations;

impl Position {
    /// Generate king moves into a provided buffer.
    ///
    /// Unlike the other pieces the result is already legal: each step is
    /// dropped if the destination is attacked once the king has left its
    /// current square.
    pub fn king_moves_into(&self, king: &Piece, moves: &mut Destinations) {
        let Some(from) = king.square else {
            return;
        };
        let enemy = king.color.opposite();

        for (df, dr) in KING_OFFSETS {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            if self.piece_at(to).is_some_and(|p| p.is(king.color)) {
                continue;
            }
            if self.is_square_attacked(to, enemy, Some(king.id)) {
                continue;
            }
            moves.push(to);
        }
    }
}
