//! Move scoring and ordering.
//!
//! Deepening every legal move does not fit a tight budget, so candidates are first
//! scored with a shallow evaluation and only the best few are searched further.

use std::cmp::Reverse;

use crate::board::Move;

use super::EngineCore;

/// A candidate move with the score it earned for the side that plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Score `mv` for the side to move: apply it, evaluate the resulting position at
/// `depth` (from the opponent's view, hence the negation), then revert.
pub fn score_move<E: EngineCore>(engine: &mut E, mv: Move, depth: u32) -> i32 {
    let undo = engine.apply(mv);
    let score = -engine.evaluate(depth);
    engine.revert(mv, undo);
    score
}

/// Score every move and keep the best `breadth_limit`, highest score first.
///
/// The sort is stable, so equal scores keep their enumeration order and the
/// result is deterministic for a deterministic engine. Null moves are skipped.
/// The engine's position is unchanged when this returns.
pub fn rank_moves<E: EngineCore>(
    engine: &mut E,
    moves: &[Move],
    breadth_limit: usize,
    depth: u32,
) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = moves
        .iter()
        .filter(|mv| !mv.is_null())
        .map(|&mv| ScoredMove {
            mv,
            score: score_move(engine, mv, depth),
        })
        .collect();
    scored.sort_by_key(|s| Reverse(s.score));
    scored.truncate(breadth_limit);
    scored
}
