use crate::{board::Position, error::UciError, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.symbol());
    }
    s
}

/// Resolve coordinate notation (`e2e4`, `e7e8q`) against the legal moves of
/// `pos`, so castle and en-passant flags come out right. A missing promotion
/// letter defaults to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let (from, to, promo) = split_coordinates(txt)?;
    let promo = promo.or(Some(PieceKind::Queen));
    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && (m.promo.is_none() || m.promo == promo))
}

/// Whether moving from `origin` to `destination` is legal in `pos`.
///
/// Exact match: a pawn reaching the last rank needs a promotion letter on
/// `destination` (`"e8q"`). Malformed input is simply not legal.
pub fn is_legal_move(pos: &Position, origin: &str, destination: &str) -> bool {
    let Some((from, to, promo)) = split_coordinates(&format!("{origin}{destination}")) else {
        return false;
    };
    legal_moves(pos)
        .iter()
        .any(|m| m.from == from && m.to == to && m.promo == promo)
}

fn split_coordinates(txt: &str) -> Option<(u8, u8, Option<PieceKind>)> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4) {
        None => None,
        Some(&b) => match PieceKind::from_symbol(b as char)? {
            PieceKind::Pawn | PieceKind::King => return None,
            kind => Some(kind),
        },
    };
    Some((from, to, promo))
}

/// Applies the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
///
/// Stops at the first move that is not legal and reports it.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), UciError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    *pos = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(UciError::UnknownSetup(other.to_string())),
    };

    for txt in moves {
        let mv = parse_uci_move(pos, txt).ok_or_else(|| UciError::IllegalMove(txt.to_string()))?;
        pos.make_move(mv);
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
