use crate::{board::Position, movegen::legal_moves_into, types::Move, uci::move_to_uci};

/// Counts leaf positions reachable in exactly `depth` plies.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Per-root-move perft counts, sorted by move text. Handy when chasing a
/// move generator mismatch against a reference engine.
pub fn perft_divide(pos: &Position, depth: u8) -> Vec<(String, u64)> {
    let mut tmp = pos.clone();
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut roots);

    let mut out: Vec<(String, u64)> = roots
        .into_iter()
        .map(|mv| {
            let mut child = pos.play(mv);
            (move_to_uci(mv), perft(&mut child, depth.saturating_sub(1)))
        })
        .collect();
    out.sort();
    out
}
