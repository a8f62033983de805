//! Tunables for the time-bounded search.

use crate::board::MAX_MOVES;

pub const DEFAULT_BREADTH_LIMIT: usize = 8;
pub const DEFAULT_RANKING_DEPTH: u32 = 1;
/// Ranking runs to completion without polling the deadline, so it stays shallow.
pub const MAX_RANKING_DEPTH: u32 = 2;
pub const DEFAULT_MAX_DEPTH: u32 = 10;
pub const DEFAULT_MOVETIME_MS: u64 = 1000;
pub const DEFAULT_MOVE_OVERHEAD_MS: u64 = 50;

/// Search configuration shared by the protocol front end and the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ranked candidates that receive deeper evaluation each iteration.
    pub breadth_limit: usize,
    /// Depth of the cheap evaluation used to rank candidates.
    pub ranking_depth: u32,
    /// Deepest refinement iteration the driver will start.
    pub max_depth: u32,
    /// Budget used when `go` carries no usable time information.
    pub default_movetime_ms: u64,
    /// Clock time held back when planning from `wtime`/`btime`.
    pub move_overhead_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            breadth_limit: DEFAULT_BREADTH_LIMIT,
            ranking_depth: DEFAULT_RANKING_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            default_movetime_ms: DEFAULT_MOVETIME_MS,
            move_overhead_ms: DEFAULT_MOVE_OVERHEAD_MS,
        }
    }
}

impl SearchConfig {
    /// Clamp every field into its usable range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.breadth_limit = self.breadth_limit.clamp(1, MAX_MOVES);
        self.ranking_depth = self.ranking_depth.clamp(1, MAX_RANKING_DEPTH);
        self.max_depth = self.max_depth.max(1);
        self
    }

    #[must_use]
    pub fn with_breadth_limit(mut self, breadth_limit: usize) -> Self {
        self.breadth_limit = breadth_limit.clamp(1, MAX_MOVES);
        self
    }

    #[must_use]
    pub fn with_ranking_depth(mut self, ranking_depth: u32) -> Self {
        self.ranking_depth = ranking_depth.clamp(1, MAX_RANKING_DEPTH);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_out_of_range_values() {
        let config = SearchConfig {
            breadth_limit: 0,
            ranking_depth: 0,
            max_depth: 0,
            ..SearchConfig::default()
        }
        .normalized();
        assert_eq!(config.breadth_limit, 1);
        assert_eq!(config.ranking_depth, 1);
        assert_eq!(config.max_depth, 1);

        let wide = SearchConfig::default().with_breadth_limit(10_000);
        assert_eq!(wide.breadth_limit, MAX_MOVES);

        let deep = SearchConfig {
            ranking_depth: 9,
            ..SearchConfig::default()
        }
        .normalized();
        assert_eq!(deep.ranking_depth, MAX_RANKING_DEPTH);
        assert_eq!(
            SearchConfig::default().with_ranking_depth(5).ranking_depth,
            MAX_RANKING_DEPTH
        );
    }
}
