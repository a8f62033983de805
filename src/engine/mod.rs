//! Search orchestration over an engine core.
//!
//! The driver only needs the narrow [`EngineCore`] capability set, so it runs
//! the same against the real [`crate::board::Board`] and a scripted test engine.

mod config;
mod core;
mod driver;
mod ranker;
pub mod time;

#[cfg(test)]
pub(crate) mod mock;

pub use self::config::{
    SearchConfig, DEFAULT_BREADTH_LIMIT, DEFAULT_MAX_DEPTH, DEFAULT_MOVETIME_MS,
    DEFAULT_MOVE_OVERHEAD_MS, DEFAULT_RANKING_DEPTH, MAX_RANKING_DEPTH,
};
pub use self::core::EngineCore;
pub use self::driver::{search, SearchOutcome};
pub use self::ranker::{rank_moves, score_move, ScoredMove};
pub use self::time::{SearchBudget, TimeControl, DEFAULT_MOVES_TO_GO};
