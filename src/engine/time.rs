//! Search deadlines and time control.
//!
//! The search is cooperative: nothing interrupts a running evaluation, the driver
//! polls [`SearchBudget::is_expired`] before starting each unit of work.

use std::time::{Duration, Instant};

/// Default moves to go estimate when not specified
pub const DEFAULT_MOVES_TO_GO: u64 = 30;

/// Wall-clock budget for one search: a start timestamp plus an allowed duration.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    start: Instant,
    duration: Duration,
}

impl SearchBudget {
    /// Start a budget of `budget_ms` milliseconds now. Negative budgets count as zero.
    #[must_use]
    pub fn start(budget_ms: i64) -> Self {
        let ms = u64::try_from(budget_ms).unwrap_or(0);
        Self::starting_at(Instant::now(), Duration::from_millis(ms))
    }

    #[must_use]
    pub fn starting_at(start: Instant, duration: Duration) -> Self {
        SearchBudget { start, duration }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.start + self.duration
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed())
    }

    /// True once the deadline has been reached. A zero budget is expired immediately.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.duration
    }
}

/// Time control requested by a `go` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeControl {
    /// No clock information; the configured default move time applies.
    #[default]
    Default,
    /// Fixed time per move, in milliseconds. May be negative as sent.
    MoveTime { time_ms: i64 },
    /// Remaining clock time and increment for the side to move.
    Incremental {
        time_left_ms: i64,
        inc_ms: i64,
        movestogo: Option<u64>,
    },
}

impl TimeControl {
    /// Milliseconds to spend on this move.
    ///
    /// `MoveTime` is taken as-is. `Incremental` spends an even share of the
    /// remaining time plus the increment, keeps `move_overhead_ms` in reserve and
    /// never plans beyond the remaining clock.
    #[must_use]
    pub fn budget_ms(&self, default_ms: u64, move_overhead_ms: u64) -> i64 {
        match *self {
            TimeControl::Default => i64::try_from(default_ms).unwrap_or(i64::MAX),
            TimeControl::MoveTime { time_ms } => time_ms.max(0),
            TimeControl::Incremental {
                time_left_ms,
                inc_ms,
                movestogo,
            } => {
                let overhead = i64::try_from(move_overhead_ms).unwrap_or(i64::MAX);
                let time_left = time_left_ms.max(0);
                let moves = movestogo.unwrap_or(DEFAULT_MOVES_TO_GO).max(1);
                let moves = i64::try_from(moves).unwrap_or(i64::MAX);
                let planned = (time_left / moves).saturating_add(inc_ms.max(0));
                let ceiling = time_left.saturating_sub(overhead);
                planned.saturating_sub(overhead).min(ceiling).max(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_budgets_expire_immediately() {
        assert!(SearchBudget::start(0).is_expired());
        let negative = SearchBudget::start(-250);
        assert!(negative.is_expired());
        assert_eq!(negative.duration(), Duration::ZERO);
    }

    #[test]
    fn budget_expires_after_duration() {
        let budget = SearchBudget::start(30);
        assert!(!budget.is_expired());
        std::thread::sleep(Duration::from_millis(40));
        assert!(budget.is_expired());
        assert_eq!(budget.remaining(), Duration::ZERO);
    }

    #[test]
    fn budget_from_past_start_is_expired() {
        let past = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .expect("1 second ago should be valid");
        let budget = SearchBudget::starting_at(past, Duration::from_millis(500));
        assert!(budget.is_expired());
        assert!(budget.deadline() < Instant::now());
    }

    #[test]
    fn move_time_is_taken_verbatim() {
        let tc = TimeControl::MoveTime { time_ms: 250 };
        assert_eq!(tc.budget_ms(1000, 50), 250);
        assert_eq!(TimeControl::MoveTime { time_ms: -5 }.budget_ms(1000, 50), 0);
        assert_eq!(TimeControl::Default.budget_ms(1000, 50), 1000);
    }

    #[test]
    fn incremental_splits_remaining_time() {
        let tc = TimeControl::Incremental {
            time_left_ms: 60_000,
            inc_ms: 1_000,
            movestogo: None,
        };
        assert_eq!(tc.budget_ms(1000, 50), 60_000 / 30 + 1_000 - 50);

        let tc = TimeControl::Incremental {
            time_left_ms: 10_000,
            inc_ms: 0,
            movestogo: Some(5),
        };
        assert_eq!(tc.budget_ms(1000, 0), 2_000);
    }

    #[test]
    fn incremental_never_exceeds_clock() {
        let tc = TimeControl::Incremental {
            time_left_ms: 100,
            inc_ms: 5_000,
            movestogo: Some(1),
        };
        assert_eq!(tc.budget_ms(1000, 50), 50);

        let flagged = TimeControl::Incremental {
            time_left_ms: 20,
            inc_ms: 0,
            movestogo: Some(0),
        };
        assert_eq!(flagged.budget_ms(1000, 50), 0);
    }
}
