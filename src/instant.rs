//! Totally ordered instants and signed durations.
//!
//! An [`Instant`] is an unambiguous moment in time: a signed millisecond count with no
//! timezone, calendar, or locale attached. Two instants are comparable iff they are both
//! `Instant`, full stop — there is no implicit normalization step to get wrong.

use std::fmt;
use std::ops::{Add, Sub};

/// An unambiguous moment in time, millisecond resolution, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// Construct an instant from a millisecond count (epoch or otherwise — the engine
    /// never interprets the value, only compares it).
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// The underlying millisecond count.
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Saturating add: used for tolerance expansion where `before`/`after` are bounded
    /// in practice, but we never want an overflow panic inside the matching loop.
    pub fn saturating_add(self, duration: Duration) -> Self {
        Self {
            millis: self.millis.saturating_add(duration.millis),
        }
    }

    /// Saturating subtract, yielding the elapsed duration between two instants.
    pub fn saturating_sub(self, other: Self) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(other.millis))
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;
    fn add(self, rhs: Duration) -> Instant {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;
    fn sub(self, rhs: Duration) -> Instant {
        self.saturating_add(rhs.negate())
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;
    fn sub(self, rhs: Instant) -> Duration {
        self.saturating_sub(rhs)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

/// A signed time span, millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// The additive identity.
    pub const ZERO: Duration = Duration { millis: 0 };

    /// Construct a duration from a millisecond count. Negative values are legal —
    /// `Duration` is signed; only [`TimeTolerance`](crate::tolerance::TimeTolerance)
    /// components are constrained to be non-negative.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    pub const fn is_zero(self) -> bool {
        self.millis == 0
    }

    pub const fn negate(self) -> Duration {
        Duration {
            millis: -self.millis,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_sub_round_trips() {
        let t = Instant::from_millis(1_000);
        let d = Duration::from_millis(250);
        assert_eq!((t + d) - d, t);
    }

    #[test]
    fn sub_between_instants_yields_duration() {
        let a = Instant::from_millis(2_000);
        let b = Instant::from_millis(500);
        assert_eq!(a - b, Duration::from_millis(1_500));
        assert_eq!(b - a, Duration::from_millis(-1_500));
    }

    #[test]
    fn ordering_is_total() {
        let a = Instant::from_millis(1);
        let b = Instant::from_millis(2);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, a);
    }

    #[test]
    fn negate_flips_sign() {
        assert_eq!(Duration::from_millis(5).negate(), Duration::from_millis(-5));
        assert!(Duration::ZERO.is_zero());
    }
}
