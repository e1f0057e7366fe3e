use crate::game_repr::tables::PAWN_CAPTURE_FILES;
use crate::game_repr::{Command, Piece, PieceId, Position, Square, Type};

use super::Destinations;

/// An en passant capture available to a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassant {
    /// Square the capturing pawn lands on (the one the victim skipped)
    pub destination: Square,
    pub victim: PieceId,
    /// Square the victim stands on, beside the capturing pawn
    pub victim_square: Square,
}

impl Position {
    /// Generate pawn moves into a provided buffer
    pub fn pawn_moves_into(&self, pawn: &Piece, moves: &mut Destinations) {
        let Some(from) = pawn.square else {
            return;
        };
        let forward = pawn.color.forward();

        // One step, then two if the pawn has never moved and both are empty
        if let Some(one) = from.offset(0, forward).filter(|sq| self.piece_at(*sq).is_none()) {
            moves.push(one);
            if pawn.move_count == 0 {
                if let Some(two) = one.offset(0, forward).filter(|sq| self.piece_at(*sq).is_none()) {
                    moves.push(two);
                }
            }
        }

        for df in PAWN_CAPTURE_FILES {
            let Some(target) = from.offset(df, forward) else {
                continue;
            };
            if self.piece_at(target).is_some_and(|p| p.is_enemy_of(pawn)) {
                moves.push(target);
            }
        }

        if let Some(ep) = self.en_passant_capture(pawn) {
            moves.push(ep.destination);
        }
    }

    /// The en passant capture open to `pawn`, if any.
    ///
    /// Only the immediately preceding Move counts: it must have carried an
    /// enemy pawn two ranks forward to the square beside `pawn`.
    pub fn en_passant_capture(&self, pawn: &Piece) -> Option<EnPassant> {
        if pawn.piece_type != Type::Pawn || pawn.captured {
            return None;
        }
        let from = pawn.square?;

        let Command::Move { piece, from: last_from, to: last_to } = self.log().last_move()? else {
            return None;
        };
        let victim = self.piece(piece)?;

        let double_step = last_from.file() == last_to.file()
            && (last_from.rank() as i8 - last_to.rank() as i8).abs() == 2;
        let beside = last_to.rank() == from.rank()
            && (last_to.file() as i8 - from.file() as i8).abs() == 1;

        if victim.piece_type != Type::Pawn
            || !victim.is_enemy_of(pawn)
            || victim.square != Some(last_to)
            || !double_step
            || !beside
        {
            return None;
        }

        let destination = last_to.offset(0, pawn.color.forward())?;
        if self.piece_at(destination).is_some() {
            return None;
        }

        Some(EnPassant {
            destination,
            victim: victim.id,
            victim_square: last_to,
        })
    }
}
