//! Time-bounded search driver.
//!
//! Each iteration asks the engine for the legal moves, ranks them with a shallow
//! evaluation and then re-evaluates the top candidates at the current depth,
//! deepening by one ply per iteration until the budget runs out. The deadline is
//! polled before every re-ranking pass and every candidate; an evaluation that
//! has started always runs to completion.

use std::time::Duration;

use crate::board::{Move, MATE_THRESHOLD};

use super::ranker::{rank_moves, ScoredMove};
use super::{EngineCore, SearchBudget, SearchConfig};

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Move to play; `None` only when the position has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` at the deepest depth it was evaluated at.
    pub score: Option<i32>,
    /// Deepest iteration that evaluated every ranked candidate.
    pub completed_depth: u32,
    /// Candidate evaluations performed across all iterations.
    pub evaluations: usize,
    pub elapsed: Duration,
}

/// Why the iteration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    NoLegalMoves,
    OnlyMove,
    Deadline,
    MateFound,
    MaxDepth,
}

/// Search the engine's current position within `budget`.
///
/// The first ranking pass always runs. If the deadline passes before any
/// candidate is refined, the top-ranked move of that pass is returned, so a
/// zero budget still answers with a move whenever one exists.
pub fn search<E: EngineCore>(
    engine: &mut E,
    budget: &SearchBudget,
    config: &SearchConfig,
) -> SearchOutcome {
    let mut best: Option<ScoredMove> = None;
    let mut fallback: Option<ScoredMove> = None;
    let mut completed_depth = 0;
    let mut evaluations = 0;
    let mut depth = 1;

    let reason = loop {
        if depth > 1 && budget.is_expired() {
            break StopReason::Deadline;
        }

        let moves = engine.legal_moves();
        if moves.is_empty() {
            break StopReason::NoLegalMoves;
        }

        let ranked = rank_moves(engine, &moves, config.breadth_limit, config.ranking_depth);
        if fallback.is_none() {
            fallback = ranked.first().copied();
        }
        if moves.len() == 1 {
            break StopReason::OnlyMove;
        }

        let mut leader: Option<ScoredMove> = None;
        let mut finished = true;
        for candidate in &ranked {
            if budget.is_expired() {
                finished = false;
                break;
            }

            let undo = engine.apply(candidate.mv);
            let refined = -engine.evaluate(depth);
            engine.revert(candidate.mv, undo);
            evaluations += 1;

            if leader.map_or(true, |l| refined > l.score) {
                let scored = ScoredMove {
                    mv: candidate.mv,
                    score: refined,
                };
                leader = Some(scored);
                best = Some(scored);
            }
        }

        if finished {
            completed_depth = depth;
            if let Some(b) = best {
                log::debug!(
                    "depth {} best {} score {} elapsed {}ms",
                    depth,
                    b.mv,
                    b.score,
                    budget.elapsed().as_millis()
                );
            }
        }

        if finished && best.is_some_and(|b| b.score.abs() >= MATE_THRESHOLD) {
            break StopReason::MateFound;
        }
        if depth >= config.max_depth {
            break StopReason::MaxDepth;
        }
        depth += 1;
    };

    let chosen = best.or(fallback);
    let outcome = SearchOutcome {
        best_move: chosen.map(|s| s.mv),
        score: chosen.map(|s| s.score),
        completed_depth,
        evaluations,
        elapsed: budget.elapsed(),
    };
    log::info!(
        "search stopped ({:?}) after {}ms: depth {} evaluations {} best {}",
        reason,
        outcome.elapsed.as_millis(),
        outcome.completed_depth,
        outcome.evaluations,
        outcome
            .best_move
            .map_or_else(|| "(none)".to_string(), |m| m.to_string())
    );
    outcome
}
