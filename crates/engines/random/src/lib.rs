//! Random Move Chess Engine
//!
//! Picks uniformly from the legal moves. Used as the sparring partner in
//! arena games, where any search at all should beat it.

use chess_core::{legal_moves_into, Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    /// Same move sequence every time for the same positions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let mut pos_copy = pos.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut pos_copy, &mut moves);

        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: None,
            nodes: self.nodes,
            from_book: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
