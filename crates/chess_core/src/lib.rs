pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait — implemented by every move-choosing player (tactical, random)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen move from the engine's own perspective, if it has one
    pub score: Option<f64>,
    /// Number of positions visited while choosing
    pub nodes: u64,
    /// Whether the move came from a fixed reply table rather than a search
    pub from_book: bool,
}

impl SearchResult {
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: None,
            nodes: 0,
            from_book: false,
        }
    }
}

/// Trait that all chess engines must implement.
///
/// The game driver and the UCI front end only talk to engines through this,
/// so any player can be swapped in for any other.
pub trait Engine: Send {
    /// Choose a move for the side to move in `pos`.
    fn search(&mut self, pos: &Position) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "chess-hackathon"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
