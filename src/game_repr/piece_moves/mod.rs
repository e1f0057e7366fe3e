mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

pub use pawn::EnPassant;

use smallvec::SmallVec;

use super::{Color, Piece, PieceId, Position, Square, Type};

/// Destination list for one piece. A queen in the open reaches 27 squares.
pub type Destinations = SmallVec<[Square; 32]>;

impl Position {
    /// Legal destinations for the piece with `id`.
    ///
    /// Empty if the piece is unknown or captured. Every candidate except a
    /// king's is probed with `move_endangers`; king steps are screened by
    /// an attack scan of the destination instead.
    pub fn legal_moves(&mut self, id: PieceId) -> Destinations {
        let mut moves = Destinations::new();

        let Some(piece) = self.piece(id).copied().filter(|p| !p.captured) else {
            return moves;
        };

        match piece.piece_type {
            Type::Pawn   => self.pawn_moves_into(&piece, &mut moves),
            Type::Rook   => self.rook_moves_into(&piece, &mut moves),
            Type::Knight => self.knight_moves_into(&piece, &mut moves),
            Type::Bishop => self.bishop_moves_into(&piece, &mut moves),
            Type::Queen  => self.queen_moves_into(&piece, &mut moves),
            Type::King   => {
                self.king_moves_into(&piece, &mut moves);
                return moves;
            }
        }

        moves.retain(|to| !self.move_endangers(id, *to));
        moves
    }

    /// Every legal (piece, destination) pair for `color`.
    pub fn legal_moves_for(&mut self, color: Color) -> Vec<(PieceId, Square)> {
        let ids: Vec<PieceId> = self.pieces_of(color).map(|p| p.id).collect();

        let mut all_moves = Vec::new();
        for id in ids {
            all_moves.extend(self.legal_moves(id).into_iter().map(|to| (id, to)));
        }
        all_moves
    }

    /// Legal destinations for whatever stands on `square`.
    pub fn legal_moves_at(&mut self, square: Square) -> Destinations {
        match self.piece_at(square).map(|p| p.id) {
            Some(id) => self.legal_moves(id),
            None => Destinations::new(),
        }
    }

    /// True if playing `id` to `to` would leave its own king in check.
    ///
    /// The move is played through the command log and always taken back
    /// before returning. A move that cannot be applied counts as dangerous.
    pub fn move_endangers(&mut self, id: PieceId, to: Square) -> bool {
        let Some(color) = self.piece(id).map(|p| p.color) else {
            return true;
        };

        self.simulate(id, to, |pos| pos.is_in_check(color))
            .unwrap_or(true)
    }

    /// Walk each direction until the edge, a friendly piece (excluded) or an
    /// enemy piece (included).
    pub(crate) fn slide_into(&self, piece: &Piece, directions: &[(i8, i8)], moves: &mut Destinations) {
        let Some(from) = piece.square else {
            return;
        };

        for &(df, dr) in directions {
            let mut next = from.offset(df, dr);
            while let Some(to) = next {
                match self.piece_at(to) {
                    None => moves.push(to),
                    Some(other) => {
                        if other.is_enemy_of(piece) {
                            moves.push(to);
                        }
                        break;
                    }
                }
                next = to.offset(df, dr);
            }
        }
    }
}
