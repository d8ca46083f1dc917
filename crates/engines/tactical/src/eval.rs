//! Static scoring of a position, always from White's point of view.

use chess_core::{sq, Color, PieceKind};

use crate::rules::Rules;

/// Positive favours White, negative favours Black.
pub type Score = f64;

/// Score of a position where the side to move has been mated (negated for White).
pub const MATE_SCORE: Score = 100.0;

pub const DRAW_SCORE: Score = 0.0;

/// Material values, indexed like `PieceKind`. The king carries no material.
const PIECE_VALUES: [Score; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 0.0];

/// Score for game-ending positions, `None` while play continues.
///
/// A mated side to move loses: White to move scores `-MATE_SCORE`, Black
/// to move `+MATE_SCORE`. Stalemate and dead positions are draws.
pub fn terminal_score<P: Rules>(pos: &P) -> Option<Score> {
    if pos.is_checkmate() {
        return Some(match pos.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        });
    }
    if pos.is_insufficient_material() || pos.is_stalemate() {
        return Some(DRAW_SCORE);
    }
    None
}

/// Full static evaluation: terminal outcome if the game is over, otherwise
/// the material balance.
pub fn evaluate_static<P: Rules>(pos: &P) -> Score {
    terminal_score(pos).unwrap_or_else(|| material_balance(pos))
}

/// `sqrt(white) - sqrt(black)` over material plus a pawn-advancement term.
///
/// Rows are visited from rank 8 down to rank 1, files a to h, and each pawn's
/// advancement term is added right after its material value. The summation
/// order is fixed so equal positions give bit-identical scores, which the
/// move selector relies on when it collects ties.
pub fn material_balance<P: Rules>(pos: &P) -> Score {
    let mut white: Score = 0.0;
    let mut black: Score = 0.0;

    for row in (0..8i8).rev() {
        let rank = f64::from(row + 1);
        for file in 0..8i8 {
            let Some(piece) = sq(file, row).and_then(|s| pos.piece_at(s)) else {
                continue;
            };
            if piece.kind == PieceKind::King {
                continue;
            }
            let value = PIECE_VALUES[piece.kind as usize];
            match piece.color {
                Color::White => {
                    white += value;
                    if piece.kind == PieceKind::Pawn {
                        white += 0.1 * rank - 0.45;
                    }
                }
                Color::Black => {
                    black += value;
                    if piece.kind == PieceKind::Pawn {
                        black += 0.45 - 0.1 * rank;
                    }
                }
            }
        }
    }

    white.sqrt() - black.sqrt()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
