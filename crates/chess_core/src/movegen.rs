use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position, promotion_rank};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// True when the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut tmp = pos.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(&tmp, &mut pseudo);
    let mover = tmp.side_to_move;
    pseudo.into_iter().any(|mv| {
        let undo = tmp.make_move(mv);
        let legal = !tmp.in_check(mover);
        tmp.unmake_move(mv, undo);
        legal
    })
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, from, pc.color, out, &DIAGONALS);
                gen_slider(pos, from, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, out, &KING_DELTAS);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == promotion_rank(c) {
        out.extend(PROMOTIONS.iter().map(|&pk| Move::with_promo(from, to, pk)));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

/// One castling option: right flag, squares that must be empty, squares the
/// king crosses (must not be attacked), and the king's destination.
struct CastleLane {
    allowed: bool,
    empty: &'static [u8],
    crossed: [u8; 2],
    king_to: u8,
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (king_from, lanes) = match c {
        Color::White => (
            4u8,
            [
                CastleLane {
                    allowed: pos.castling.wk,
                    empty: &[5, 6],
                    crossed: [5, 6],
                    king_to: 6,
                },
                CastleLane {
                    allowed: pos.castling.wq,
                    empty: &[3, 2, 1],
                    crossed: [3, 2],
                    king_to: 2,
                },
            ],
        ),
        Color::Black => (
            60u8,
            [
                CastleLane {
                    allowed: pos.castling.bk,
                    empty: &[61, 62],
                    crossed: [61, 62],
                    king_to: 62,
                },
                CastleLane {
                    allowed: pos.castling.bq,
                    empty: &[59, 58, 57],
                    crossed: [59, 58],
                    king_to: 58,
                },
            ],
        ),
    };
    if from != king_from || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for lane in lanes {
        if lane.allowed
            && lane.empty.iter().all(|&s| pos.piece_at(s).is_none())
            && lane
                .crossed
                .iter()
                .all(|&s| !pos.is_square_attacked(s, enemy))
        {
            let mut mv = Move::new(from, lane.king_to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
