//! Game and match records, stored as JSON.

use chess_core::{Color, Termination};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ArenaError;

/// Result of a single game from the bot's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// The ply limit ran out first
    MoveCap,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Result for the player of `color`.
    pub fn result_for(self, color: Color) -> GameResult {
        match self.winner() {
            Some(winner) if winner == color => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }

    /// PGN-style score string.
    pub fn score_text(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl From<Termination> for GameOutcome {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Checkmate { winner } => GameOutcome::Checkmate { winner },
            Termination::Stalemate => GameOutcome::Stalemate,
            Termination::InsufficientMaterial => GameOutcome::InsufficientMaterial,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameOutcome::Stalemate => f.write_str("Stalemate"),
            GameOutcome::InsufficientMaterial => f.write_str("Draw by insufficient material"),
            GameOutcome::MoveCap => f.write_str("Draw by move cap"),
        }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start_fen: String,
    pub bot_color: Color,
    /// Moves in coordinate notation, in the order played
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub result: GameResult,
    /// Bot moves answered from the opening book
    pub book_moves: u32,
    pub duration_ms: u64,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Tally of a match, from the bot's perspective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub bot: String,
    pub opponent: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(bot: &str, opponent: &str) -> Self {
        Self {
            bot: bot.to_string(),
            opponent: opponent.to_string(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points scored by the bot as a fraction of games played.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + self.draws as f64 * 0.5) / total as f64
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ArenaError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n", self.bot, self.opponent));
        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "Game {:>3}: {:<8} {:<7} as {:<5} {:>4} plies  {}\n",
                i + 1,
                game.outcome.score_text(),
                format!("{:?}", game.result),
                game.bot_color,
                game.plies(),
                game.outcome
            ));
        }
        report.push_str(&format!(
            "Score: +{} -{} ={} ({:.1}%)\n",
            self.wins,
            self.losses,
            self.draws,
            self.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
