use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_promotions_generate_all_four_pieces() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.from == 52)
        .map(|m| m.promo)
        .collect();
    assert_eq!(promos.len(), 4);
    assert!(promos.contains(&Some(PieceKind::Knight)));
}

#[test]
fn test_en_passant_generated() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let ep: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_en_passant)
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to, coord_to_sq("f6").unwrap());
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 pinned by the rook on e8
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| m.from != 12));
}

#[test]
fn test_cannot_castle_through_attack() {
    // Black rook on f8 covers f1
    let pos = Position::from_fen("5rk1/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(!legal_moves(&pos).iter().any(|m| m.is_castle));
}

#[test]
fn test_has_legal_move_matches_generator() {
    let mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(!has_legal_move(&mated));
    assert!(has_legal_move(&Position::startpos()));
}
