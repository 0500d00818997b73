//! Output receivers: per-match callbacks, per-anchor group callbacks, and the
//! infallible/fallible split that realizes `MatchError::SinkFault` in a language with
//! no checked exceptions.

use crate::pair::{MatchGroup, MatchPair};
use crate::policy::MatchType;
use crate::relation::TemporalRelation;

/// Receives matched pairs and misses, one call at a time, in emission order.
///
/// `pair` borrows from the call's anchor/candidate storage and is only valid for the
/// duration of this call — implementations that need to retain match data past the
/// callback must copy out whatever fields they need (see [`RecordingPairSink`]).
pub trait PairSink<A, C> {
    /// Called once per matched pair, in emission order.
    fn on_match(&mut self, pair: &MatchPair<'_, A, C>);
    /// Called exactly once for each anchor that produced zero matches, in anchor
    /// input order.
    fn on_miss(&mut self, anchor: &A);
}

/// Receives, per anchor, either one group of matched candidates or one miss.
pub trait GroupSink<A, C> {
    /// Called once per anchor that has at least one match. `group`'s candidate view
    /// is valid only for the duration of this call (see §5 allocation discipline).
    fn on_match(&mut self, group: &MatchGroup<'_, A, C>);
    /// Called exactly once for each anchor with zero matches.
    fn on_miss(&mut self, anchor: &A);
}

/// Like [`PairSink`], but `on_match`/`on_miss` may fail. A sink error is wrapped as
/// [`MatchError::SinkFault`](crate::error::MatchError::SinkFault) by the strategy that
/// drives it, and no further emission occurs for that call.
pub trait TryPairSink<A, C> {
    type Error;
    fn on_match(&mut self, pair: &MatchPair<'_, A, C>) -> Result<(), Self::Error>;
    fn on_miss(&mut self, anchor: &A) -> Result<(), Self::Error>;
}

/// Fallible counterpart to [`GroupSink`].
pub trait TryGroupSink<A, C> {
    type Error;
    fn on_match(&mut self, group: &MatchGroup<'_, A, C>) -> Result<(), Self::Error>;
    fn on_miss(&mut self, anchor: &A) -> Result<(), Self::Error>;
}

/// Every infallible [`PairSink`] is trivially a [`TryPairSink`] whose error type can
/// never be constructed.
impl<A, C, S: PairSink<A, C>> TryPairSink<A, C> for S {
    type Error = std::convert::Infallible;

    fn on_match(&mut self, pair: &MatchPair<'_, A, C>) -> Result<(), Self::Error> {
        PairSink::on_match(self, pair);
        Ok(())
    }

    fn on_miss(&mut self, anchor: &A) -> Result<(), Self::Error> {
        PairSink::on_miss(self, anchor);
        Ok(())
    }
}

impl<A, C, S: GroupSink<A, C>> TryGroupSink<A, C> for S {
    type Error = std::convert::Infallible;

    fn on_match(&mut self, group: &MatchGroup<'_, A, C>) -> Result<(), Self::Error> {
        GroupSink::on_match(self, group);
        Ok(())
    }

    fn on_miss(&mut self, anchor: &A) -> Result<(), Self::Error> {
        GroupSink::on_miss(self, anchor);
        Ok(())
    }
}

/// A recorded match, owned independently of the call that produced it — the `PairSink`
/// equivalent of copying a row out of a result set. Used by [`RecordingPairSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMatch<A, C> {
    pub anchor: A,
    pub candidate: C,
    pub match_type: MatchType,
    pub relation: Option<TemporalRelation>,
}

/// A [`PairSink`] that clones matches and misses into plain `Vec`s, for tests and
/// small callers who don't want to write their own sink. Not used on any
/// allocation-sensitive path internal to the crate.
#[derive(Debug, Clone)]
pub struct RecordingPairSink<A, C> {
    pub matches: Vec<RecordedMatch<A, C>>,
    pub misses: Vec<A>,
}

// Not `#[derive(Default)]`: the derive would require `A: Default`/`C: Default`
// even though `Vec::default()` needs no such bound.
impl<A, C> Default for RecordingPairSink<A, C> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            misses: Vec::new(),
        }
    }
}

impl<A: Clone, C: Clone> PairSink<A, C> for RecordingPairSink<A, C> {
    fn on_match(&mut self, pair: &MatchPair<'_, A, C>) {
        self.matches.push(RecordedMatch {
            anchor: pair.anchor().clone(),
            candidate: pair.candidate().clone(),
            match_type: pair.match_type(),
            relation: pair.relation(),
        });
    }

    fn on_miss(&mut self, anchor: &A) {
        self.misses.push(anchor.clone());
    }
}

/// A [`GroupSink`] that clones every group and miss into plain `Vec`s, for tests.
#[derive(Debug, Clone)]
pub struct RecordingGroupSink<A, C> {
    pub groups: Vec<(A, Vec<C>)>,
    pub misses: Vec<A>,
}

impl<A, C> Default for RecordingGroupSink<A, C> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            misses: Vec::new(),
        }
    }
}

impl<A: Clone, C: Clone> GroupSink<A, C> for RecordingGroupSink<A, C> {
    fn on_match(&mut self, group: &MatchGroup<'_, A, C>) {
        let matches = group.matches().iter().map(|c| (*c).clone()).collect();
        self.groups.push((group.anchor().clone(), matches));
    }

    fn on_miss(&mut self, anchor: &A) {
        self.misses.push(anchor.clone());
    }
}
