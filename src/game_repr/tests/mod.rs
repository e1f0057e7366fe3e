use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse algebraic notation, panicking on typos in the test itself
pub fn sq(s: &str) -> Square {
    s.parse().unwrap_or_else(|_| panic!("bad square in test: {}", s))
}

/// Helper function to place a piece on an empty square
pub fn place_piece(pos: &mut Position, square: &str, color: Color, piece_type: Type) -> PieceId {
    pos.place(piece_type, color, sq(square))
        .unwrap_or_else(|| panic!("{} is already occupied", square))
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[Square], to: &str) -> bool {
    moves.contains(&sq(to))
}

/// Play a move by squares, asserting it is legal first
pub fn play(pos: &mut Position, from: &str, to: &str) {
    let id = pos
        .piece_at(sq(from))
        .map(|p| p.id)
        .unwrap_or_else(|| panic!("no piece on {}", from));
    let moves = pos.legal_moves(id);
    assert!(has_move(&moves, to), "{} -> {} is not legal, legal: {:?}", from, to, moves);
    assert!(pos.make_move(id, sq(to)));
}

/// Every piece record, captured or not, for exact before/after comparisons
pub fn snapshot(pos: &Position) -> Vec<Piece> {
    pos.all_pieces().to_vec()
}

// ==================== TEST MODULES ====================

mod king_movement;
mod pawn_movement;
