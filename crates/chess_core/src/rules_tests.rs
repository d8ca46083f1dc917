use super::*;

#[test]
fn test_checkmate_detected() {
    let pos =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert_eq!(
        pos.termination(),
        Some(Termination::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_stalemate_detected() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.termination(), Some(Termination::Stalemate));
}

#[test]
fn test_lone_knight_with_opponent_pawn_is_not_insufficient() {
    // The knight side could still be helped into a mate by the pawn side
    let pos = Position::from_fen("8/8/8/4k3/4p3/4K3/8/6N1 w - - 0 1").unwrap();
    assert!(!pos.has_insufficient_material(Color::White));
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_gives_check() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    assert!(pos.gives_check(Move::new(4, 60)));
    assert!(!pos.gives_check(Move::new(4, 12)));
}

#[test]
fn test_discovered_check_counts() {
    // Moving the bishop off the e-file uncovers the rook
    let pos = Position::from_fen("4k3/8/8/8/8/8/4B3/4R1K1 w - - 0 1").unwrap();
    assert!(pos.gives_check(Move::new(12, 21)));
}

#[test]
fn test_is_capture_includes_en_passant() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let moves = crate::movegen::legal_moves(&pos);
    let ep = moves.iter().find(|m| m.is_en_passant).copied().unwrap();
    assert!(pos.is_capture(ep));

    let push = moves
        .iter()
        .find(|m| m.from == 36 && m.to == 44)
        .copied()
        .unwrap();
    assert!(!pos.is_capture(push));

    let open = Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2")
        .unwrap();
    assert!(open.is_capture(Move::new(28, 35)));
    assert!(!open.is_capture(Move::new(11, 19)));
}
