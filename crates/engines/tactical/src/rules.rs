//! The capabilities the search needs from a rules engine.
//!
//! The search never touches a concrete board type. Anything that can list
//! legal moves, hand back an independent child position, and answer the
//! terminal and per-move questions below can be searched.

use std::fmt;

use chess_core::{Color, Piece, Position};

pub trait Rules: Sized {
    type Move: Copy + PartialEq + fmt::Debug + fmt::Display;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// A new position with `mv` applied. `self` is left as it was.
    fn play(&self, mv: Self::Move) -> Self;

    fn side_to_move(&self) -> Color;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    fn gives_check(&self, mv: Self::Move) -> bool;
    fn is_capture(&self, mv: Self::Move) -> bool;

    /// Piece on `square` (0 = a1, 63 = h8).
    fn piece_at(&self, square: u8) -> Option<Piece>;

    /// Placement, side to move, castling and en passant, comparable as text.
    fn position_key(&self) -> String;

    /// Resolve coordinate notation such as `d2d4` to a legal move.
    fn parse_move(&self, coords: &str) -> Option<Self::Move>;
}

impl Rules for Position {
    type Move = chess_core::Move;

    fn legal_moves(&self) -> Vec<Self::Move> {
        chess_core::legal_moves(self)
    }

    fn play(&self, mv: Self::Move) -> Self {
        Position::play(self, mv)
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn is_checkmate(&self) -> bool {
        Position::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Position::is_stalemate(self)
    }

    fn is_insufficient_material(&self) -> bool {
        Position::is_insufficient_material(self)
    }

    fn gives_check(&self, mv: Self::Move) -> bool {
        Position::gives_check(self, mv)
    }

    fn is_capture(&self, mv: Self::Move) -> bool {
        Position::is_capture(self, mv)
    }

    fn piece_at(&self, square: u8) -> Option<Piece> {
        Position::piece_at(self, square)
    }

    fn position_key(&self) -> String {
        self.epd_key()
    }

    fn parse_move(&self, coords: &str) -> Option<Self::Move> {
        chess_core::parse_uci_move(self, coords)
    }
}
