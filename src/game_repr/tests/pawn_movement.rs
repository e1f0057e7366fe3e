use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_white_pawn_initial_double_move() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);

    let moves = pos.legal_moves(pawn);

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e3"));
    assert!(has_move(&moves, "e4"));
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "d7", Color::Black, Type::Pawn);

    let moves = pos.legal_moves(pawn);

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "d6"));
    assert!(has_move(&moves, "d5"));
}

#[test]
fn test_pawn_blocked() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e3", Color::Black, Type::Knight);

    // Pawns never capture straight ahead, and cannot jump
    assert!(pos.legal_moves(pawn).is_empty());
}

#[test]
fn test_double_step_needs_empty_destination() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e4", Color::Black, Type::Pawn);

    let moves = pos.legal_moves(pawn);

    assert_eq!(moves.as_slice(), &[sq("e3")]);
}

#[test]
fn test_no_double_step_after_first_move() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);

    play(&mut pos, "e2", "e4");
    assert_eq!(pos.piece(pawn).map(|p| p.move_count), Some(1));

    let moves = pos.legal_moves(pawn);
    assert_eq!(moves.as_slice(), &[sq("e5")]);
}

#[test]
fn test_pawn_diagonal_captures() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "d3", Color::Black, Type::Pawn);
    place_piece(&mut pos, "f3", Color::Black, Type::Bishop);

    let moves = pos.legal_moves(pawn);

    assert_eq!(moves.len(), 4);
    assert!(has_move(&moves, "d3"));
    assert!(has_move(&moves, "f3"));
}

#[test]
fn test_pawn_does_not_capture_own_piece() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "d3", Color::White, Type::Knight);

    let moves = pos.legal_moves(pawn);

    assert!(!has_move(&moves, "d3"));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_pawn_capture_does_not_wrap() {
    let mut pos = Position::empty();
    let pawn = place_piece(&mut pos, "a2", Color::White, Type::Pawn);
    place_piece(&mut pos, "h2", Color::Black, Type::Rook);
    place_piece(&mut pos, "h3", Color::Black, Type::Rook);

    let moves = pos.legal_moves(pawn);

    assert_eq!(moves.len(), 2);
    assert!(!has_move(&moves, "h3"));
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    let mut pos = Position::empty();
    let white = place_piece(&mut pos, "c8", Color::White, Type::Pawn);
    let black = place_piece(&mut pos, "f1", Color::Black, Type::Pawn);

    assert!(pos.legal_moves(white).is_empty());
    assert!(pos.legal_moves(black).is_empty());
}
