//! Tactical Chess Engine
//!
//! Minimax without pruning over a depth budget that checks spend slowly,
//! captures faster and quiet moves fastest. Leaves are scored by square-rooted
//! material with a small bonus for advanced pawns. Ties at the root are broken
//! at random.

pub mod book;
pub mod config;
pub mod depth;
pub mod eval;
pub mod rules;
pub mod search;
pub mod select;

use chess_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub use book::{book_reply, BookEntry, OPENING_BOOK};
pub use config::{ConfigError, EngineConfig};
pub use depth::{DepthBudget, MoveClass};
pub use eval::{evaluate_static, material_balance, terminal_score, Score, DRAW_SCORE, MATE_SCORE};
pub use rules::Rules;
pub use search::{classify, search, SearchStats};
pub use select::{score_root_moves, select_move, BestMoves, Selection};

/// The hackathon bot behind the `Engine` interface.
#[derive(Debug, Clone)]
pub struct TacticalEngine {
    config: EngineConfig,
    rng: StdRng,
    /// Positions visited during the last move choice
    nodes: u64,
}

impl TacticalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full selection details for `pos`, `None` if it has no legal moves.
    pub fn choose(&mut self, pos: &Position) -> Option<Selection<chess_core::Move>> {
        let selection = select_move(pos, self.config.use_book, &mut self.rng)?;
        self.nodes = selection.stats.visited();
        info!("My move: {}", selection.chosen);
        Some(selection)
    }
}

impl Default for TacticalEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for TacticalEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        self.nodes = 0;
        match self.choose(pos) {
            Some(selection) => SearchResult {
                best_move: Some(selection.chosen),
                score: selection.score,
                nodes: self.nodes,
                from_book: selection.from_book,
            },
            None => SearchResult::no_move(),
        }
    }

    fn name(&self) -> &str {
        "Tactical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        // A fixed seed replays the same tie-breaks every game.
        if self.config.seed.is_some() {
            self.rng = seeded_rng(self.config.seed);
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "seed" => match value.parse::<u64>() {
                Ok(seed) => {
                    self.config.seed = Some(seed);
                    self.rng = seeded_rng(Some(seed));
                    true
                }
                Err(_) => false,
            },
            "ownbook" => match value.parse::<bool>() {
                Ok(flag) => {
                    self.config.use_book = flag;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
