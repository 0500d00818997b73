//! The two shapes matched output can take: a flat pair, or a group of candidates per
//! anchor. Both borrow from the caller's own anchor/candidate storage — the engine
//! never clones an entity to report a match.

use crate::error::MatchError;
use crate::policy::MatchType;
use crate::relation::TemporalRelation;

/// An immutable, borrowed record of one matched (anchor, candidate) pair.
///
/// **Invariant I2:** `relation` is `Some` iff `match_type == MatchType::Interval`. The
/// constructor enforces this; there is no way to build a `MatchPair` that violates it.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchPair<'a, A, C> {
    anchor: &'a A,
    candidate: &'a C,
    match_type: MatchType,
    relation: Option<TemporalRelation>,
}

// Not `#[derive(Clone, Copy)]`: the derive would require `A: Clone`/`A: Copy` even
// though a `&'a A` field is always Copy regardless of `A`.
impl<'a, A, C> Clone for MatchPair<'a, A, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A, C> Copy for MatchPair<'a, A, C> {}

impl<'a, A, C> MatchPair<'a, A, C> {
    /// Construct a match pair, validating Invariant I2.
    pub fn new(
        anchor: &'a A,
        candidate: &'a C,
        match_type: MatchType,
        relation: Option<TemporalRelation>,
    ) -> Result<Self, MatchError> {
        if match_type.carries_relation() != relation.is_some() {
            return Err(MatchError::InvalidMatchPair);
        }
        Ok(Self {
            anchor,
            candidate,
            match_type,
            relation,
        })
    }

    pub fn anchor(&self) -> &'a A {
        self.anchor
    }

    pub fn candidate(&self) -> &'a C {
        self.candidate
    }

    pub const fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub const fn relation(&self) -> Option<TemporalRelation> {
        self.relation
    }
}

/// A read-only view of all candidates matched to a single anchor, in emission order.
///
/// A group with zero matches is never constructed — an anchor with no matches is
/// reported through [`PairSink::on_miss`](crate::sink::PairSink::on_miss) /
/// [`GroupSink::on_miss`](crate::sink::GroupSink::on_miss) instead.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchGroup<'a, A, C> {
    anchor: &'a A,
    matches: &'a [&'a C],
}

impl<'a, A, C> Clone for MatchGroup<'a, A, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A, C> Copy for MatchGroup<'a, A, C> {}

impl<'a, A, C> MatchGroup<'a, A, C> {
    /// Construct a group view. Debug-asserts that `matches` is non-empty — groups with
    /// zero matches are a programming error in this crate, never caller-visible (the
    /// engine reports an `on_miss` instead); see `strategy::emit_group`.
    pub(crate) fn new(anchor: &'a A, matches: &'a [&'a C]) -> Self {
        debug_assert!(!matches.is_empty(), "MatchGroup must carry at least one match");
        Self { anchor, matches }
    }

    pub fn anchor(&self) -> &'a A {
        self.anchor
    }

    pub fn matches(&self) -> &'a [&'a C] {
        self.matches
    }
}
