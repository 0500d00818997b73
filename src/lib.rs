//! `temporal_match`: a high-performance temporal correlation engine over Allen's
//! interval algebra.
//!
//! Given an **anchor** sequence and a **candidate** sequence of points and/or
//! intervals, this crate reports, for each anchor, the candidates that stand in a
//! configured temporal relationship to it — subject to a tolerance window, a subset
//! of Allen's thirteen interval relations, and an optional ordering guarantee on the
//! inputs that unlocks a faster matching strategy.
//!
//! The twelve entry points are named `match_<anchor kind>_to_<candidate kind>`, each
//! available in three output shapes: a per-match [`PairSink`](sink::PairSink)
//! callback, a per-anchor [`GroupSink`](sink::GroupSink) callback, and a caller-owned
//! buffer. All three shapes, and all applicable strategies within a shape, emit the
//! same multiset of matches for the same input — strategy selection is a pure
//! performance optimization (see [`MatchPolicy::input_ordering`](policy::MatchPolicy)).
//!
//! ```
//! use temporal_match::{Instant, MatchPolicy, TemporalPoint, match_point_to_point};
//! use temporal_match::sink::RecordingPairSink;
//!
//! #[derive(Clone)]
//! struct Event(i64);
//! impl TemporalPoint for Event {
//!     fn at(&self) -> Instant { Instant::from_millis(self.0) }
//! }
//!
//! let anchors = vec![Event(0), Event(10)];
//! let candidates = vec![Event(10), Event(40)];
//! let mut sink = RecordingPairSink::default();
//! match_point_to_point(&anchors, &candidates, &MatchPolicy::new(), &mut sink).unwrap();
//! assert_eq!(sink.matches.len(), 1);
//! ```

pub mod entity;
pub mod error;
pub mod filter;
pub mod instant;
pub mod pair;
pub mod policy;
pub mod relation;
pub mod sink;
pub mod strategy;
pub mod tolerance;

pub use entity::{TemporalInterval, TemporalPoint};
pub use error::{MatchError, Result, Side};
pub use filter::AllowedRelations;
pub use instant::{Duration, Instant};
pub use pair::{MatchGroup, MatchPair};
pub use policy::{InputOrdering, MatchPolicy, MatchType};
pub use relation::TemporalRelation;
pub use sink::{GroupSink, PairSink, TryGroupSink, TryPairSink};
pub use tolerance::TimeTolerance;

/// Match point anchors against point candidates, emitting through a [`PairSink`].
pub fn match_point_to_point<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    strategy::point_point::match_pairs(anchors, candidates, policy, sink)
}

/// Match point anchors against interval candidates, emitting through a [`PairSink`].
pub fn match_point_to_interval<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalPoint,
    C: TemporalInterval,
    S: TryPairSink<A, C>,
{
    strategy::point_interval::match_pairs(anchors, candidates, policy, sink)
}

/// Match interval anchors against point candidates, emitting through a [`PairSink`].
pub fn match_interval_to_point<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalInterval,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    strategy::interval_point::match_pairs(anchors, candidates, policy, sink)
}

/// Match interval anchors against interval candidates, emitting through a [`PairSink`].
pub fn match_interval_to_interval<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalInterval,
    C: TemporalInterval,
    S: TryPairSink<A, C>,
{
    strategy::interval_interval::match_pairs(anchors, candidates, policy, sink)
}

/// Match point anchors against point candidates, emitting through a [`GroupSink`].
pub fn match_point_to_point_grouped<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryGroupSink<A, C>,
{
    strategy::point_point::match_groups(anchors, candidates, policy, sink)
}

/// Match point anchors against interval candidates, emitting through a [`GroupSink`].
pub fn match_point_to_interval_grouped<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalPoint,
    C: TemporalInterval,
    S: TryGroupSink<A, C>,
{
    strategy::point_interval::match_groups(anchors, candidates, policy, sink)
}

/// Match interval anchors against point candidates, emitting through a [`GroupSink`].
pub fn match_interval_to_point_grouped<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalInterval,
    C: TemporalPoint,
    S: TryGroupSink<A, C>,
{
    strategy::interval_point::match_groups(anchors, candidates, policy, sink)
}

/// Match interval anchors against interval candidates, emitting through a [`GroupSink`].
pub fn match_interval_to_interval_grouped<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<()>
where
    A: TemporalInterval,
    C: TemporalInterval,
    S: TryGroupSink<A, C>,
{
    strategy::interval_interval::match_groups(anchors, candidates, policy, sink)
}

/// Match point anchors against point candidates into a caller-owned buffer.
pub fn match_point_to_point_buffered<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize>
where
    A: TemporalPoint,
    C: TemporalPoint,
{
    strategy::point_point::match_buffer(anchors, candidates, policy, buffer)
}

/// Match point anchors against interval candidates into a caller-owned buffer.
pub fn match_point_to_interval_buffered<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize>
where
    A: TemporalPoint,
    C: TemporalInterval,
{
    strategy::point_interval::match_buffer(anchors, candidates, policy, buffer)
}

/// Match interval anchors against point candidates into a caller-owned buffer.
pub fn match_interval_to_point_buffered<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize>
where
    A: TemporalInterval,
    C: TemporalPoint,
{
    strategy::interval_point::match_buffer(anchors, candidates, policy, buffer)
}

/// Match interval anchors against interval candidates into a caller-owned buffer.
pub fn match_interval_to_interval_buffered<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize>
where
    A: TemporalInterval,
    C: TemporalInterval,
{
    strategy::interval_interval::match_buffer(anchors, candidates, policy, buffer)
}
