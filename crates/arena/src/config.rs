//! Match configuration, loadable from TOML.
//!
//! ```toml
//! games = 4
//! max_plies = 300
//! bot_color = "white"
//! opponent = "random"
//! seed = 42
//! show_board = false
//! ```

use chess_core::{Color, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ArenaError;

/// Who sits across the board from the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// A second copy of the tactical bot
    Tactical,
}

impl FromStr for OpponentKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "tactical" | "self" => Ok(OpponentKind::Tactical),
            _ => Err(ArenaError::UnknownOpponent(s.to_string())),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Random => f.write_str("random"),
            OpponentKind::Tactical => f.write_str("tactical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies before a game is stopped and scored as a draw
    pub max_plies: u32,
    /// Side the bot plays
    pub bot_color: Color,
    pub opponent: OpponentKind,
    /// Starting position; the initial position when unset
    pub start_fen: Option<String>,
    /// Seed for both players' random choices
    pub seed: Option<u64>,
    /// Print the board after every ply
    pub show_board: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 1,
            max_plies: 400,
            bot_color: Color::Black,
            opponent: OpponentKind::Random,
            start_fen: None,
            seed: None,
            show_board: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let text = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The position every game starts from.
    pub fn start_position(&self) -> Result<Position, ArenaError> {
        match &self.start_fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}
