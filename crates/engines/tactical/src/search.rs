//! Minimax over a move-class-weighted depth budget.
//!
//! Checks, captures and quiet moves each spend a different share of the
//! budget, so forcing lines run deeper than quiet ones. Near the horizon
//! quiet moves are not expanded at all: the node instead receives one static
//! score of its own position.

use chess_core::Color;

use crate::depth::{DepthBudget, MoveClass};
use crate::eval::{material_balance, terminal_score, Score};
use crate::rules::Rules;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Positions whose moves were expanded
    pub nodes: u64,
    /// Static material evaluations
    pub evaluations: u64,
    /// Positions cut short by mate, stalemate or dead material
    pub terminals: u64,
    /// Smallest budget at which a static evaluation happened
    pub lowest_leaf_budget: Option<DepthBudget>,
}

impl SearchStats {
    /// Positions visited of any kind.
    pub fn visited(&self) -> u64 {
        self.nodes + self.evaluations + self.terminals
    }

    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.evaluations += other.evaluations;
        self.terminals += other.terminals;
        self.lowest_leaf_budget = match (self.lowest_leaf_budget, other.lowest_leaf_budget) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    fn record_leaf(&mut self, budget: DepthBudget) {
        self.evaluations += 1;
        self.lowest_leaf_budget = Some(match self.lowest_leaf_budget {
            Some(low) => low.min(budget),
            None => budget,
        });
    }
}

/// Check first, then capture, otherwise quiet.
pub fn classify<P: Rules>(pos: &P, mv: P::Move) -> MoveClass {
    if pos.gives_check(mv) {
        MoveClass::Check
    } else if pos.is_capture(mv) {
        MoveClass::Capture
    } else {
        MoveClass::Quiet
    }
}

/// Score of `pos` for White with `budget` left to spend.
///
/// White to move takes the best child for White, Black to move the best
/// child for Black. Game-ending positions are scored before the budget is
/// looked at.
pub fn search<P: Rules>(pos: &P, budget: DepthBudget, stats: &mut SearchStats) -> Score {
    if let Some(score) = terminal_score(pos) {
        stats.terminals += 1;
        return score;
    }

    if budget.is_exhausted() {
        stats.record_leaf(budget);
        return material_balance(pos);
    }

    stats.nodes += 1;

    let mut checks = Vec::new();
    let mut captures = Vec::new();
    let mut quiet = Vec::new();
    for mv in pos.legal_moves() {
        match classify(pos, mv) {
            MoveClass::Check => checks.push(mv),
            MoveClass::Capture => captures.push(mv),
            MoveClass::Quiet => quiet.push(mv),
        }
    }

    let mut scores = Vec::with_capacity(checks.len() + captures.len() + quiet.len().max(1));
    for mv in checks {
        scores.push(search(&pos.play(mv), budget.after(MoveClass::Check), stats));
    }
    for mv in captures {
        scores.push(search(&pos.play(mv), budget.after(MoveClass::Capture), stats));
    }
    if budget.expands_quiet_moves() {
        for mv in quiet {
            scores.push(search(&pos.play(mv), budget.after(MoveClass::Quiet), stats));
        }
    } else {
        // Stand pat: one look at the position as it is, whether or not any
        // quiet moves exist.
        scores.push(search(pos, DepthBudget::FORCE_STATIC, stats));
    }

    debug_assert!(
        !scores.is_empty(),
        "non-terminal position produced no child scores"
    );

    best_for(pos.side_to_move(), &scores)
}

/// Maximum for White, minimum for Black.
fn best_for(side: Color, scores: &[Score]) -> Score {
    match side {
        Color::White => scores.iter().copied().fold(Score::NEG_INFINITY, Score::max),
        Color::Black => scores.iter().copied().fold(Score::INFINITY, Score::min),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
