//! Progress reporting for long seed runs.

use std::fmt;

/// Rows between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 25;

/// Percentage of `total` that `value` represents; `0.0` when `total` is zero.
pub fn calculate_percentage(value: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    value as f64 / total as f64 * 100.0
}

/// A point in a seed run where progress is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: calculate_percentage(completed, total),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} = {:.2}%",
            self.completed, self.total, self.percentage
        )
    }
}

/// Returns a [`Progress`] when `completed` (1-based) lands on a multiple of `every`.
pub fn checkpoint(completed: usize, total: usize, every: usize) -> Option<Progress> {
    if every == 0 || completed == 0 || completed % every != 0 {
        return None;
    }
    Some(Progress::new(completed, total))
}
