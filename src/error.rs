//! Fatal conditions raised by the matching engine.
//!
//! Every failure in this crate is an input-validation or buffer-capacity error — there
//! are no transient errors and nothing here is retried internally. Construct one of
//! these, return it, and the call is over; callers fix the input (or the buffer size)
//! and call again.

use thiserror::Error;

/// Errors raised by [`crate::tolerance`], [`crate::pair`], and the `match_*` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An interval with `start > end` was passed to the engine. Carries the 0-based
    /// index of the offending entity within whichever sequence (anchors or candidates)
    /// it came from, and a tag identifying which sequence that was.
    #[error("invalid interval at {side} index {index}: start is after end")]
    InvalidInterval {
        /// Which input sequence the offending entity came from.
        side: Side,
        /// 0-based position within that sequence.
        index: usize,
    },

    /// A [`TimeTolerance`](crate::tolerance::TimeTolerance) was constructed with a
    /// negative `before` or `after` component.
    #[error("invalid tolerance: before and after must both be >= 0")]
    InvalidTolerance,

    /// A [`MatchPair`](crate::pair::MatchPair) was constructed in violation of
    /// Invariant I2: `relation` must be `Some` iff `match_type == Interval`.
    #[error("invalid match pair: relation must be set iff match_type is Interval")]
    InvalidMatchPair,

    /// `input_ordering` asserted an ordering the data does not actually satisfy.
    /// Carries the index of the first out-of-order element.
    #[error("unsorted input on {side} side: index {index} is out of order")]
    UnsortedInput {
        /// Which input sequence failed the ordering check.
        side: Side,
        /// 0-based position of the first element found out of order.
        index: usize,
    },

    /// A caller-supplied fixed-capacity buffer filled before every match could be
    /// written. The count already written is reported separately by the call site
    /// (the error itself just signals that the buffer was too small).
    #[error("buffer exhausted after {written} matches; enlarge the buffer and retry")]
    BufferExhausted {
        /// Number of matches successfully written before the buffer filled.
        written: usize,
    },

    /// A [`TryPairSink`](crate::sink::TryPairSink)/[`TryGroupSink`](crate::sink::TryGroupSink)
    /// implementation returned an error from `on_match` or `on_miss`.
    #[error("sink reported a failure; no further matches were emitted")]
    SinkFault,
}

/// Which of the two input sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Anchor,
    Candidate,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Anchor => write!(f, "anchor"),
            Side::Candidate => write!(f, "candidate"),
        }
    }
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, MatchError>;
