//! Fixed replies for the first move of a game.

use crate::rules::Rules;

/// One exact-position shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// Placement, side to move, castling, en passant
    pub key: &'static str,
    /// Reply in coordinate notation
    pub reply: &'static str,
}

pub const OPENING_BOOK: [BookEntry; 3] = [
    // Initial position: queen's pawn
    BookEntry {
        key: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        reply: "d2d4",
    },
    // 1.e4: answer symmetrically
    BookEntry {
        key: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -",
        reply: "e7e5",
    },
    // 1.d4: answer symmetrically
    BookEntry {
        key: "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq -",
        reply: "d7d5",
    },
];

/// The book reply for `pos`, if its key matches an entry exactly.
pub fn book_reply<P: Rules>(pos: &P) -> Option<P::Move> {
    let key = pos.position_key();
    let entry = OPENING_BOOK.iter().find(|entry| entry.key == key)?;
    pos.parse_move(entry.reply)
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
