use log::{trace, warn};

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE, QUERIES AND COMMAND APPLICATION
 */

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone)]
pub struct Position {
    /// Every piece ever placed, indexed by `PieceId`. Captured pieces stay here.
    pieces: Vec<Piece>,
    /// Square index -> occupant, kept in sync by `execute`/`unexecute`
    occupancy: [Option<PieceId>; 64],
    log: CommandLog,
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

/// Undoes one move-unit when dropped, so a probe can never leak its move.
struct Rollback<'a> {
    position: &'a mut Position,
}

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        self.position.undo();
    }
}

impl Position {
    /// A board with no pieces and an empty log.
    pub fn empty() -> Position {
        Position {
            pieces: Vec::with_capacity(32),
            occupancy: [None; 64],
            log: CommandLog::new(),
        }
    }

    /// The 32 piece starting layout, White on ranks 1 and 2.
    pub fn standard() -> Position {
        let mut pos = Position::empty();

        for color in [Color::White, Color::Black] {
            for square in Square::all().filter(|s| s.rank() == color.back_rank()) {
                pos.place(BACK_RANK[square.file() as usize], color, square);
            }
            for square in Square::all().filter(|s| s.rank() == color.pawn_rank()) {
                pos.place(Type::Pawn, color, square);
            }
        }

        pos
    }

    /// Put a new piece on an empty square.
    ///
    /// Returns `None` (and places nothing) if the square is taken.
    pub fn place(&mut self, piece_type: Type, color: Color, square: Square) -> Option<PieceId> {
        if let Some(occupant) = self.piece_at(square) {
            warn!("cannot place {:?} on {}: occupied by {}", piece_type, square, occupant.name());
            return None;
        }

        let id = PieceId(u8::try_from(self.pieces.len()).ok()?);

        // pawns are labelled from 0 (WP0..WP7), everything else from 1
        let same_kind = self
            .pieces
            .iter()
            .filter(|p| p.color == color && p.piece_type == piece_type)
            .count() as u8;
        let ordinal = if piece_type == Type::Pawn { same_kind } else { same_kind + 1 };

        self.pieces.push(Piece {
            id,
            piece_type,
            color,
            square: Some(square),
            move_count: 0,
            captured: false,
            ordinal,
        });
        self.occupancy[square.index()] = Some(id);

        Some(id)
    }

    // ===========================
    // Queries
    // ===========================

    /// Every piece still on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| !p.captured)
    }

    /// Every piece still on the board belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Every piece ever placed, captured ones included.
    pub fn all_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// The piece standing on `square`. Captured pieces never occupy a square.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupancy[square.index()]
            .and_then(|id| self.piece(id))
            .filter(|p| !p.captured)
    }

    pub fn square_of(&self, id: PieceId) -> Option<Square> {
        self.piece(id).and_then(|p| p.square)
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.piece_type == Type::King)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king(color).and_then(|k| k.square)
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    // ===========================
    // Commands
    // ===========================

    fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    fn vacate(&mut self, square: Square, id: PieceId) {
        let slot = &mut self.occupancy[square.index()];
        if *slot == Some(id) {
            *slot = None;
        }
    }

    fn occupy(&mut self, square: Square, id: PieceId) {
        self.occupancy[square.index()] = Some(id);
    }

    fn execute(&mut self, command: Command) {
        trace!("execute {:?}", command);
        match command {
            Command::Move { piece, from, to } => {
                self.vacate(from, piece);
                self.occupy(to, piece);
                let p = self.piece_mut(piece);
                p.square = Some(to);
                p.move_count += 1;
            }
            Command::Capture { piece, square } => {
                let p = self.piece_mut(piece);
                p.captured = true;
                p.square = None;
                self.vacate(square, piece);
            }
        }
        self.log.push(command);
    }

    fn unexecute(&mut self, command: Command) {
        trace!("unexecute {:?}", command);
        match command {
            Command::Move { piece, from, to } => {
                self.vacate(to, piece);
                self.occupy(from, piece);
                let p = self.piece_mut(piece);
                p.square = Some(from);
                p.move_count = p.move_count.saturating_sub(1);
            }
            Command::Capture { piece, square } => {
                self.occupy(square, piece);
                let p = self.piece_mut(piece);
                p.captured = false;
                p.square = Some(square);
            }
        }
    }

    /// Apply one move-unit: a Move, plus a Capture when an enemy stood on
    /// `to` or the move takes en passant.
    ///
    /// Legality is not checked here beyond refusing to land on a friendly
    /// piece; callers filter through `legal_moves` first.
    pub fn make_move(&mut self, id: PieceId, to: Square) -> bool {
        let Some(mover) = self.piece(id).copied().filter(|p| !p.captured) else {
            return false;
        };
        let Some(from) = mover.square else {
            return false;
        };

        let victim = match self.piece_at(to) {
            Some(occupant) if !occupant.is_enemy_of(&mover) => {
                warn!("{} cannot move onto friendly {} at {}", mover.name(), occupant.name(), to);
                return false;
            }
            Some(occupant) => Some((occupant.id, to)),
            None => self
                .en_passant_capture(&mover)
                .filter(|ep| ep.destination == to)
                .map(|ep| (ep.victim, ep.victim_square)),
        };

        self.execute(Command::Move { piece: id, from, to });
        if let Some((piece, square)) = victim {
            self.execute(Command::Capture { piece, square });
        }

        true
    }

    /// Reverse the most recent move-unit. Returns `false` on an empty log.
    pub fn undo(&mut self) -> bool {
        if self.log.is_empty() {
            return false;
        }

        while let Some(command) = self.log.pop() {
            self.unexecute(command);
            if command.is_move() {
                break;
            }
        }

        true
    }

    /// Play `id` to `to`, hand the resulting position to `probe`, then undo.
    ///
    /// The undo runs from a drop guard, so it also happens if `probe`
    /// unwinds. Returns `None` when the move could not be applied.
    pub fn simulate<R>(&mut self, id: PieceId, to: Square, probe: impl FnOnce(&Position) -> R) -> Option<R> {
        if !self.make_move(id, to) {
            return None;
        }

        let guard = Rollback { position: self };
        let result = probe(&*guard.position);
        drop(guard);

        Some(result)
    }
}
