//! Move generation node counts.

use crate::board::Move;
use crate::engine::EngineCore;

/// Count leaf nodes of the legal move tree `depth` plies deep.
pub fn perft<E: EngineCore>(engine: &mut E, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = engine.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = engine.apply(mv);
        nodes += perft(engine, depth - 1);
        engine.revert(mv, undo);
    }

    nodes
}

/// Per-move node counts at the root, in move generation order.
pub fn perft_divide<E: EngineCore>(engine: &mut E, depth: u32) -> Vec<(Move, u64)> {
    let moves = engine.legal_moves();
    let mut counts = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = engine.apply(mv);
        counts.push((mv, perft(engine, depth.saturating_sub(1))));
        engine.revert(mv, undo);
    }
    counts
}
