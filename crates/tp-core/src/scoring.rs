//! Time limit and score of a maze run
//!
//! A player gets one second per cell to reach the goal. The score is the
//! number of seconds left, in hundreds.

use std::time::Duration;

use crate::SCORE_PER_SECOND;
use crate::maze::Dimensions;

/// Time allowed to find the goal
pub fn time_limit(dims: Dimensions) -> Duration {
    Duration::from_secs(dims.total_cells() as u64)
}

/// Score after `elapsed` time; negative once the limit has passed
pub fn score(dims: Dimensions, elapsed: Duration) -> i64 {
    let remaining = dims.total_cells() as i64 - elapsed.as_secs() as i64;
    remaining * SCORE_PER_SECOND
}

/// Whether the run is over because time ran out
pub fn timed_out(dims: Dimensions, elapsed: Duration) -> bool {
    elapsed >= time_limit(dims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_limit() {
        assert_eq!(time_limit(Dimensions::new(10, 10)), Duration::from_secs(100));
    }

    #[test]
    fn test_score() {
        let dims = Dimensions::new(10, 10);
        assert_eq!(score(dims, Duration::ZERO), 10_000);
        assert_eq!(score(dims, Duration::from_millis(30_900)), 7_000);
        assert_eq!(score(dims, Duration::from_secs(100)), 0);
        assert_eq!(score(dims, Duration::from_secs(101)), -100);
    }

    #[test]
    fn test_timed_out() {
        let dims = Dimensions::new(5, 5);
        assert!(!timed_out(dims, Duration::from_secs(24)));
        assert!(timed_out(dims, Duration::from_secs(25)));
    }
}
