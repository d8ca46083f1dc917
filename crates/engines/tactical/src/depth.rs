//! Look-ahead allowance, spent at different rates per move class.
//!
//! The allowance moves in steps of half a ply, so it is stored as a count of
//! half-plies and compared exactly.

use std::fmt;

/// How a move relates to the position it is played from. A move that both
/// checks and captures is a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveClass {
    Check,
    Capture,
    Quiet,
}

impl MoveClass {
    /// Budget spent by following a move of this class, in half-plies.
    pub const fn cost(self) -> i32 {
        match self {
            MoveClass::Check => 1,
            MoveClass::Capture => 4,
            MoveClass::Quiet => 6,
        }
    }
}

/// Remaining search depth in half-plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepthBudget(i32);

impl DepthBudget {
    /// Budget given to each child of the root: 4.5 plies.
    pub const ROOT: DepthBudget = DepthBudget(9);

    /// Budget used to evaluate a position as it stands: -1 ply.
    pub const FORCE_STATIC: DepthBudget = DepthBudget(-2);

    /// Quiet moves are expanded only above 2 plies.
    const QUIET_HORIZON: i32 = 4;

    pub const fn from_half_plies(half_plies: i32) -> Self {
        DepthBudget(half_plies)
    }

    /// Nearest half-ply budget to `plies`.
    pub fn from_plies(plies: f64) -> Self {
        DepthBudget((plies * 2.0).round() as i32)
    }

    pub const fn half_plies(self) -> i32 {
        self.0
    }

    pub fn plies(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// At or below zero the position is scored without looking further.
    pub const fn is_exhausted(self) -> bool {
        self.0 <= 0
    }

    pub const fn expands_quiet_moves(self) -> bool {
        self.0 > Self::QUIET_HORIZON
    }

    /// Budget left for the child reached by a move of `class`.
    pub const fn after(self, class: MoveClass) -> Self {
        DepthBudget(self.0 - class.cost())
    }
}

impl fmt::Display for DepthBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.plies())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_in_plies() {
        let root = DepthBudget::ROOT;
        assert_eq!(root.plies(), 4.5);
        assert_eq!(root.after(MoveClass::Check).plies(), 4.0);
        assert_eq!(root.after(MoveClass::Capture).plies(), 2.5);
        assert_eq!(root.after(MoveClass::Quiet).plies(), 1.5);
        assert_eq!(DepthBudget::FORCE_STATIC.plies(), -1.0);
    }

    #[test]
    fn quiet_horizon_is_strictly_above_two_plies() {
        assert!(DepthBudget::from_plies(2.5).expands_quiet_moves());
        assert!(!DepthBudget::from_plies(2.0).expands_quiet_moves());
        assert!(!DepthBudget::from_plies(1.5).expands_quiet_moves());
    }

    #[test]
    fn exhaustion_includes_zero() {
        assert!(DepthBudget::from_plies(0.0).is_exhausted());
        assert!(DepthBudget::from_plies(-1.5).is_exhausted());
        assert!(!DepthBudget::from_plies(0.5).is_exhausted());
        assert_eq!(DepthBudget::from_plies(0.5).to_string(), "0.5");
    }
}
