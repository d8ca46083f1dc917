//! Errors raised while reading positions and moves from text.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 8 ranks in board field, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },

    #[error("invalid piece character '{ch}'")]
    InvalidPiece { ch: char },

    #[error("invalid side to move '{field}'")]
    InvalidSideToMove { field: String },

    #[error("invalid castling character '{ch}'")]
    InvalidCastling { ch: char },

    #[error("invalid en-passant square '{field}'")]
    InvalidEnPassant { field: String },

    #[error("invalid move counter '{field}'")]
    InvalidCounter { field: String },
}

/// Failures while applying a UCI `position` command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("unknown position setup '{0}'")]
    UnknownSetup(String),

    #[error("illegal move '{0}'")]
    IllegalMove(String),
}
