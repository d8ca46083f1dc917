use super::*;

fn game(outcome: GameOutcome, bot_color: Color) -> GameRecord {
    GameRecord {
        start_fen: chess_core::STARTING_FEN.to_string(),
        bot_color,
        moves: vec!["e2e4".to_string(), "e7e5".to_string()],
        outcome,
        result: outcome.result_for(bot_color),
        book_moves: 1,
        duration_ms: 12,
    }
}

#[test]
fn test_result_for_each_side() {
    let mate = GameOutcome::Checkmate {
        winner: Color::Black,
    };
    assert_eq!(mate.result_for(Color::Black), GameResult::Win);
    assert_eq!(mate.result_for(Color::White), GameResult::Loss);
    assert_eq!(GameOutcome::MoveCap.result_for(Color::White), GameResult::Draw);
    assert_eq!(mate.score_text(), "0-1");
    assert_eq!(GameOutcome::Stalemate.score_text(), "1/2-1/2");
}

#[test]
fn test_outcome_text() {
    let mate = GameOutcome::Checkmate {
        winner: Color::White,
    };
    assert_eq!(mate.to_string(), "Checkmate, White wins");
    assert_eq!(
        GameOutcome::from(Termination::InsufficientMaterial).to_string(),
        "Draw by insufficient material"
    );
}

#[test]
fn test_tally_and_score() {
    let mut result = MatchResult::new("Tactical v1.0", "Random v1.0");
    assert_eq!(result.score(), 0.5);

    result.record(game(GameOutcome::Checkmate { winner: Color::Black }, Color::Black));
    result.record(game(GameOutcome::Stalemate, Color::Black));
    result.record(game(GameOutcome::Checkmate { winner: Color::White }, Color::Black));

    assert_eq!((result.wins, result.losses, result.draws), (1, 1, 1));
    assert_eq!(result.total_games(), 3);
    assert!((result.score() - 0.5).abs() < 1e-12);
    assert!(result.generate_report().contains("Score: +1 -1 =1"));
}

#[test]
fn test_save_and_load() {
    let mut result = MatchResult::new("Tactical v1.0", "Random v1.0");
    result.record(game(GameOutcome::MoveCap, Color::White));

    let path = std::env::temp_dir().join(format!("arena_results_{}.json", std::process::id()));
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, result);
}

#[test]
fn test_load_missing_file() {
    let err = MatchResult::load(Path::new("/nonexistent/results.json")).unwrap_err();
    assert!(matches!(err, ArenaError::Io { .. }));
}
