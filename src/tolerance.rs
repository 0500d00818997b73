//! Asymmetric `(before, after)` expansion windows.

use crate::error::MatchError;
use crate::instant::{Duration, Instant};

/// An immutable, non-negative `(before, after)` expansion window.
///
/// Applied to a point `p`, produces the interval `[p.at - before, p.at + after]`.
/// Applied to an interval `[s, e]`, produces `[s - before, e + after]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeTolerance {
    before: Duration,
    after: Duration,
}

impl TimeTolerance {
    /// Exact matching: no expansion in either direction.
    pub const NONE: TimeTolerance = TimeTolerance {
        before: Duration::ZERO,
        after: Duration::ZERO,
    };

    /// Construct a tolerance, rejecting negative components.
    pub fn new(before: Duration, after: Duration) -> Result<Self, MatchError> {
        if before.as_millis() < 0 || after.as_millis() < 0 {
            return Err(MatchError::InvalidTolerance);
        }
        Ok(Self { before, after })
    }

    /// A symmetric tolerance: `before == after == d`.
    pub fn symmetric(d: Duration) -> Result<Self, MatchError> {
        Self::new(d, d)
    }

    pub const fn before(&self) -> Duration {
        self.before
    }

    pub const fn after(&self) -> Duration {
        self.after
    }

    /// True iff this tolerance performs no expansion at all.
    pub const fn is_exact(&self) -> bool {
        self.before.is_zero() && self.after.is_zero()
    }

    /// Expand a single instant into the window `[at - before, at + after]`.
    pub fn expand_point(&self, at: Instant) -> (Instant, Instant) {
        (at - self.before, at + self.after)
    }

    /// Expand an interval `[start, end]` into `[start - before, end + after]`.
    pub fn expand_interval(&self, start: Instant, end: Instant) -> (Instant, Instant) {
        (start - self.before, end + self.after)
    }
}

impl Default for TimeTolerance {
    fn default() -> Self {
        Self::NONE
    }
}
