//! Root move choice: score every legal move, keep the ties for best, pick one
//! at random.

use chess_core::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::book::book_reply;
use crate::depth::DepthBudget;
use crate::eval::Score;
use crate::rules::Rules;
use crate::search::{search, SearchStats};

/// Moves sharing the best score seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMoves<M> {
    moves: Vec<M>,
    score: Score,
}

impl<M: Copy> BestMoves<M> {
    /// Empty set whose score is below anything a position can score.
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            score: Score::NEG_INFINITY,
        }
    }

    /// A strictly better score replaces the set, an equal one joins it.
    pub fn offer(&mut self, mv: M, score: Score) {
        if score > self.score {
            self.moves.clear();
            self.moves.push(mv);
            self.score = score;
        } else if score == self.score {
            self.moves.push(mv);
        }
    }

    pub fn moves(&self) -> &[M] {
        &self.moves
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<M> {
        self.moves.choose(rng).copied()
    }
}

impl<M: Copy> Default for BestMoves<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one root move choice.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<M> {
    pub chosen: M,
    /// Score for the side that moved; `None` for book replies
    pub score: Option<Score>,
    /// Every move that shared the best score
    pub tied: Vec<M>,
    pub from_book: bool,
    pub stats: SearchStats,
}

/// Each legal root move with its score for the side to move, in move order.
pub fn score_root_moves<P: Rules>(root: &P, stats: &mut SearchStats) -> Vec<(P::Move, Score)> {
    let mover = root.side_to_move();
    root.legal_moves()
        .into_iter()
        .map(|mv| {
            let child = root.play(mv);
            let mut subtree = SearchStats::default();
            let white_view = search(&child, DepthBudget::ROOT, &mut subtree);
            let score = match mover {
                Color::White => white_view,
                Color::Black => -white_view,
            };
            debug!(candidate = %mv, score, visited = subtree.visited(), "scored root move");
            stats.merge(&subtree);
            (mv, score)
        })
        .collect()
}

/// Pick the move for the side to move in `root`.
///
/// With `use_book` set, the three fixed opening replies short-circuit the
/// search. Returns `None` only if `root` has no legal moves, which callers
/// are expected to rule out first.
pub fn select_move<P, R>(root: &P, use_book: bool, rng: &mut R) -> Option<Selection<P::Move>>
where
    P: Rules,
    R: Rng + ?Sized,
{
    if use_book {
        if let Some(mv) = book_reply(root) {
            debug!(reply = %mv, "opening book hit");
            return Some(Selection {
                chosen: mv,
                score: None,
                tied: vec![mv],
                from_book: true,
                stats: SearchStats::default(),
            });
        }
    }

    let mut stats = SearchStats::default();
    let mut best = BestMoves::new();
    for (mv, score) in score_root_moves(root, &mut stats) {
        best.offer(mv, score);
    }

    let Some(chosen) = best.choose(rng) else {
        warn!("move requested for a position without legal moves");
        return None;
    };
    debug!(
        tied = best.moves().len(),
        score = best.score(),
        nodes = stats.visited(),
        "root search finished"
    );

    Some(Selection {
        chosen,
        score: Some(best.score()),
        tied: best.moves().to_vec(),
        from_book: false,
        stats,
    })
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
