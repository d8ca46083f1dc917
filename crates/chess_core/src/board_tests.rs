use super::*;

#[test]
fn test_play_leaves_source_untouched() {
    let pos = Position::startpos();
    let e4 = Move::new(12, 28);
    let next = pos.play(e4);

    assert_eq!(pos, Position::startpos());
    assert_eq!(next.side_to_move, Color::Black);
    assert_eq!(next.en_passant, Some(20));
    assert!(next.piece_at(12).is_none());
}

#[test]
fn test_make_unmake_restores_position() {
    let original =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let mut pos = original.clone();
    for mv in crate::movegen::legal_moves(&original) {
        let undo = pos.make_move(mv);
        pos.unmake_move(mv, undo);
        assert_eq!(pos, original, "make/unmake of {mv} changed the position");
    }
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut castle = Move::new(4, 6);
    castle.is_castle = true;
    let next = pos.play(castle);

    assert_eq!(next.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(next.piece_at(7).is_none());
    assert!(!next.castling.wk && !next.castling.wq);
    assert!(next.castling.bk && next.castling.bq);
}

#[test]
fn test_rook_capture_on_corner_clears_right() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let next = pos.play(Move::new(0, 56));
    assert!(!next.castling.bq);
    assert!(!next.castling.wq);
}

#[test]
fn test_display_matches_diagram() {
    let text = Position::startpos().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "r n b q k b n r");
    assert_eq!(lines[4], ". . . . . . . .");
    assert_eq!(lines[7], "R N B Q K B N R");
}
