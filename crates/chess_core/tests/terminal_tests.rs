//! Terminal-state predicates: checkmate, stalemate and insufficient material.

use chess_core::{Color, Position, Termination, legal_moves};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN '{fen}': {e}"))
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn stalemate_positions() {
    for fen in [
        // Queen boxes the king into the corner
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        // King and pawn against king
        "6k1/6P1/6K1/8/8/8/8/8 b - - 0 1",
    ] {
        let p = pos(fen);
        assert!(legal_moves(&p).is_empty(), "{fen}: expected no legal moves");
        assert!(p.is_stalemate(), "{fen}: expected stalemate");
        assert!(!p.is_checkmate(), "{fen}: stalemate is not mate");
        assert_eq!(p.termination(), Some(Termination::Stalemate));
    }
}

#[test]
fn moving_side_with_moves_is_not_stalemate() {
    // Same corner but White to move
    assert!(!pos("k7/2K5/1Q6/8/8/8/8/8 w - - 0 1").is_stalemate());
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn insufficient_material_positions() {
    let cases = [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", "K vs K"),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", "K+B vs K"),
        ("8/8/8/4k3/8/4KN2/8/8 w - - 0 1", "K+N vs K"),
        ("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+B"),
        ("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+N"),
        ("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "K+B vs K+B, both dark"),
        ("8/8/8/4k3/8/4K3/8/4Q1N1 w - - 0 1", "K+N vs K+Q is drawn for Black only"),
    ];
    for (fen, label) in &cases[..6] {
        let p = pos(fen);
        assert!(p.is_insufficient_material(), "{label} should be insufficient");
        assert_eq!(p.termination(), Some(Termination::InsufficientMaterial));
    }

    let (fen, label) = cases[6];
    let p = pos(fen);
    assert!(!p.is_insufficient_material(), "{label}");
    assert!(!p.has_insufficient_material(Color::White));
}

#[test]
fn sufficient_material_positions() {
    for (fen, label) in [
        ("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "bishops on opposite colours"),
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", "K+P vs K"),
        ("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1", "K+R vs K"),
        ("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1", "K+Q vs K"),
        ("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1", "K+N+N vs K"),
    ] {
        assert!(!pos(fen).is_insufficient_material(), "{label} should be sufficient");
    }
}

#[test]
fn lone_knight_against_queen_is_insufficient_for_knight_side() {
    let p = pos("8/8/8/4k3/8/4K3/8/4q1N1 w - - 0 1");
    assert!(p.has_insufficient_material(Color::White));
    assert!(!p.has_insufficient_material(Color::Black));
}

// =============================================================================
// Checkmate vs check
// =============================================================================

#[test]
fn checkmate_is_not_stalemate() {
    let p = pos("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(p.is_checkmate());
    assert!(!p.is_stalemate());
    assert!(p.is_game_over());
}

#[test]
fn check_is_not_checkmate() {
    let p = pos("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(p.is_check());
    assert!(!p.is_checkmate());
    assert!(!p.is_game_over());
}
