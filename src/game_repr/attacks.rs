use super::tables::*;
use super::*;

impl Position {
    /// Checks if `square` is attacked by any piece of `by_color`.
    ///
    /// `ignoring` is treated as if it were not on the board; a king uses it
    /// to look at squares it would step to without shielding itself.
    pub fn is_square_attacked(&self, square: Square, by_color: Color, ignoring: Option<PieceId>) -> bool {
        let occupant = |sq: Square| self.piece_at(sq).filter(|p| Some(p.id) != ignoring);
        let attacker = |p: &Piece, types: &[Type]| p.color == by_color && types.contains(&p.piece_type);

        // Sliders: the nearest piece along each ray decides
        let sliders = [
            (ORTHOGONAL, [Type::Rook, Type::Queen]),
            (DIAGONAL, [Type::Bishop, Type::Queen]),
        ];
        for (directions, types) in sliders.iter() {
            for &(df, dr) in directions {
                let mut next = square.offset(df, dr);
                while let Some(sq) = next {
                    if let Some(piece) = occupant(sq) {
                        if attacker(piece, types) {
                            return true;
                        }
                        break;
                    }
                    next = sq.offset(df, dr);
                }
            }
        }

        let knight_attack = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| square.offset(df, dr))
            .filter_map(occupant)
            .any(|p| attacker(p, &[Type::Knight]));
        if knight_attack {
            return true;
        }

        // A pawn of `by_color` attacks from one rank behind, seen from its side
        let pawn_attack = PAWN_CAPTURE_FILES
            .iter()
            .filter_map(|&df| square.offset(df, -by_color.forward()))
            .filter_map(occupant)
            .any(|p| attacker(p, &[Type::Pawn]));
        if pawn_attack {
            return true;
        }

        KING_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| square.offset(df, dr))
            .filter_map(occupant)
            .any(|p| attacker(p, &[Type::King]))
    }

    /// Checks if the king of the given color is currently in check.
    ///
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(square) => self.is_square_attacked(square, color.opposite(), None),
            None => false,
        }
    }

    /// Checks if any piece of `color` has a legal destination.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let ids: Vec<PieceId> = self.pieces_of(color).map(|p| p.id).collect();
        ids.into_iter().any(|id| !self.legal_moves(id).is_empty())
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }
}
