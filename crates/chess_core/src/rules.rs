//! Game-state queries: terminal conditions and per-move predicates.

use crate::board::Position;
use crate::movegen::has_legal_move;
use crate::types::*;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl Position {
    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    /// The side to move is in check and has no legal reply.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !has_legal_move(self)
    }

    /// The side to move is not in check and has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_move(self)
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// Whether `color` lacks mating material, counting helpmate and selfmate
    /// chances the opponent's pieces could offer.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let own = |kind| self.squares_of(color, kind).count();
        let theirs = |kind| self.squares_of(color.other(), kind).count();

        if own(PieceKind::Pawn) + own(PieceKind::Rook) + own(PieceKind::Queen) > 0 {
            return false;
        }

        let knights = own(PieceKind::Knight);
        let bishops = own(PieceKind::Bishop);

        if knights > 0 {
            // A lone knight only fails when the opponent has nothing a
            // selfmate could be built around.
            let opponent_minor_or_rook = theirs(PieceKind::Pawn)
                + theirs(PieceKind::Knight)
                + theirs(PieceKind::Bishop)
                + theirs(PieceKind::Rook);
            return knights + bishops == 1 && opponent_minor_or_rook == 0;
        }

        if bishops > 0 {
            let bishop_squares: Vec<u8> = [Color::White, Color::Black]
                .into_iter()
                .flat_map(|c| self.squares_of(c, PieceKind::Bishop))
                .collect();
            let dark = bishop_squares.iter().filter(|&&s| is_dark_square(s)).count();
            let same_square_colour = dark == 0 || dark == bishop_squares.len();
            let pawns_or_knights = [Color::White, Color::Black].into_iter().any(|c| {
                self.squares_of(c, PieceKind::Pawn).next().is_some()
                    || self.squares_of(c, PieceKind::Knight).next().is_some()
            });
            return same_square_colour && !pawns_or_knights;
        }

        true
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    pub fn termination(&self) -> Option<Termination> {
        if self.is_checkmate() {
            Some(Termination::Checkmate {
                winner: self.side_to_move.other(),
            })
        } else if self.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.is_stalemate() {
            Some(Termination::Stalemate)
        } else {
            None
        }
    }

    /// Whether playing `mv` leaves the opponent in check.
    pub fn gives_check(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        self.play(mv).in_check(mover.other())
    }

    /// Whether `mv` removes an enemy piece, en passant included.
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_en_passant
            || self
                .piece_at(mv.to)
                .is_some_and(|pc| pc.color != self.side_to_move)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
