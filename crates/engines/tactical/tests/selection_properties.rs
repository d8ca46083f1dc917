//! Whole-search properties: colour symmetry, seeded determinism, and the
//! full scoring of the initial position.

use chess_core::{legal_moves, Position};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tactical_engine::{
    evaluate_static, material_balance, score_root_moves, search, select_move, DepthBudget,
    SearchStats,
};

const EPS: f64 = 1e-9;

/// Flip the board top to bottom and swap the colours of everything on it.
fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let swap_case = |s: &str| -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    };

    let placement: Vec<String> = fields[0].split('/').rev().map(swap_case).collect();
    let side = if fields[1] == "w" { "b" } else { "w" };

    let mut castling: Vec<char> = swap_case(fields[2]).chars().collect();
    castling.sort_by_key(|c| "KQkq-".find(*c));
    let castling: String = castling.into_iter().collect();

    let en_passant = match fields[3] {
        "-" => "-".to_string(),
        sq => {
            let file = &sq[..1];
            let rank = if &sq[1..] == "3" { "6" } else { "3" };
            format!("{file}{rank}")
        }
    };

    format!(
        "{} {} {} {} {} {}",
        placement.join("/"),
        side,
        castling,
        en_passant,
        fields.get(4).unwrap_or(&"0"),
        fields.get(5).unwrap_or(&"1")
    )
}

fn play_random_line(choices: &[usize]) -> Position {
    let mut pos = Position::startpos();
    for &choice in choices {
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        pos = pos.play(moves[choice % moves.len()]);
    }
    pos
}

#[test]
fn mirror_of_start_is_start() {
    let start = Position::startpos().to_fen();
    assert_eq!(mirror_fen(&start), start.replace(" w ", " b "));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn static_score_flips_with_colours(choices in prop::collection::vec(0usize..64, 0..40)) {
        let pos = play_random_line(&choices);
        let mirrored = Position::from_fen(&mirror_fen(&pos.to_fen())).unwrap();

        prop_assert!((material_balance(&mirrored) + material_balance(&pos)).abs() < EPS);
        prop_assert!((evaluate_static(&mirrored) + evaluate_static(&pos)).abs() < EPS);
    }

    #[test]
    fn shallow_search_flips_with_colours(choices in prop::collection::vec(0usize..64, 0..24)) {
        let pos = play_random_line(&choices);
        let mirrored = Position::from_fen(&mirror_fen(&pos.to_fen())).unwrap();
        let budget = DepthBudget::from_plies(1.5);

        let score = search(&pos, budget, &mut SearchStats::default());
        let mirrored_score = search(&mirrored, budget, &mut SearchStats::default());
        prop_assert!((score + mirrored_score).abs() < EPS, "{score} vs {mirrored_score}");
    }
}

#[test]
fn same_seed_same_move() {
    let pos = Position::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    for seed in [0u64, 1, 99] {
        let a = select_move(&pos, true, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = select_move(&pos, true, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a.chosen, b.chosen);
    }
}

#[test]
fn every_seed_picks_among_the_tied() {
    let pos = Position::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let mut stats = SearchStats::default();
    let scored = score_root_moves(&pos, &mut stats);
    let best = scored
        .iter()
        .map(|&(_, s)| s)
        .fold(f64::NEG_INFINITY, f64::max);

    for seed in 0..16 {
        let selection = select_move(&pos, false, &mut StdRng::seed_from_u64(seed)).unwrap();
        let chosen_score = scored
            .iter()
            .find(|(mv, _)| *mv == selection.chosen)
            .map(|&(_, s)| s)
            .unwrap();
        assert_eq!(chosen_score, best);
    }
}

#[test]
fn initial_position_scores_all_twenty_moves() {
    let pos = Position::startpos();
    let mut stats = SearchStats::default();
    let scored = score_root_moves(&pos, &mut stats);

    assert_eq!(scored.len(), 20);
    assert!(scored.iter().all(|(_, s)| s.is_finite()));

    let best = scored
        .iter()
        .map(|&(_, s)| s)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(scored.iter().any(|&(_, s)| s == best));

    let selection = select_move(&pos, false, &mut StdRng::seed_from_u64(7)).unwrap();
    assert!(!selection.from_book);
    assert_eq!(selection.score, Some(best));
}
