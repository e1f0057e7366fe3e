use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_all_directions() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "d4", Color::White, Type::King);

    let moves = pos.legal_moves(king);

    assert_eq!(moves.len(), 8, "King should have 8 moves from center");
    for to in ["c3", "d3", "e3", "c4", "e4", "c5", "d5", "e5"] {
        assert!(has_move(&moves, to), "missing {}", to);
    }
}

#[test]
fn test_king_cannot_capture_own_pieces() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "d4", Color::White, Type::King);

    // Surround orthogonally with white pawns
    place_piece(&mut pos, "e4", Color::White, Type::Pawn);
    place_piece(&mut pos, "c4", Color::White, Type::Pawn);
    place_piece(&mut pos, "d5", Color::White, Type::Pawn);
    place_piece(&mut pos, "d3", Color::White, Type::Pawn);

    let moves = pos.legal_moves(king);

    assert_eq!(moves.len(), 4, "King should not capture own pieces");
    assert!(!has_move(&moves, "e4"));
    assert!(!has_move(&moves, "c4"));
    assert!(!has_move(&moves, "d5"));
    assert!(!has_move(&moves, "d3"));
}

#[test]
fn test_king_cannot_wrap_around_board() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "h4", Color::White, Type::King);

    let moves = pos.legal_moves(king);
    assert_eq!(moves.len(), 5, "King should not wrap around board edges");
    assert!(!has_move(&moves, "a4"));
    assert!(!has_move(&moves, "a5"));

    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "a1", Color::White, Type::King);
    assert_eq!(pos.legal_moves(king).len(), 3, "Corner king has 3 moves");
}

#[test]
fn test_king_captures_undefended_piece() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e2", Color::Black, Type::Rook);

    let moves = pos.legal_moves(king);

    // d2 and f2 are on the rook's rank
    assert!(has_move(&moves, "e2"));
    assert!(has_move(&moves, "d1"));
    assert!(has_move(&moves, "f1"));
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e2", Color::Black, Type::Rook);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);

    let moves = pos.legal_moves(king);

    assert!(!has_move(&moves, "e2"), "e2 is defended by the rook on e8");
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "e4", Color::White, Type::King);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);

    let moves = pos.legal_moves(king);

    // e3 is only shielded by the king itself
    assert!(!has_move(&moves, "e3"));
    assert!(!has_move(&moves, "e5"));
    assert_eq!(moves.len(), 6);
}

#[test]
fn test_kings_cannot_touch() {
    let mut pos = Position::empty();
    let king = place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e3", Color::Black, Type::King);

    let moves = pos.legal_moves(king);

    assert!(!has_move(&moves, "d2"));
    assert!(!has_move(&moves, "e2"));
    assert!(!has_move(&moves, "f2"));
    assert_eq!(moves.len(), 2);
}
