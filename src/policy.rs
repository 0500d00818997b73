//! The matcher's entire configuration surface: tolerances, the relation filter, and the
//! ordering guarantee the caller is willing to assert about its inputs.

use crate::filter::AllowedRelations;
use crate::tolerance::TimeTolerance;

/// What ordering guarantee, if any, the caller asserts about its input sequences.
///
/// The engine validates whichever guarantee is asserted once, up front — never inside
/// the per-candidate inner loop — and fails with
/// [`MatchError::UnsortedInput`](crate::error::MatchError::UnsortedInput) if the data
/// does not actually satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputOrdering {
    /// No ordering guarantee; the brute-force strategy is used.
    #[default]
    None,
    /// Candidates are non-decreasing by their sort key (point `at`, or interval `start`).
    CandidatesSorted,
    /// Both anchors and candidates are non-decreasing by their sort key.
    BothSorted,
}

/// The immutable configuration for a single matcher call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPolicy {
    anchor_tolerance: TimeTolerance,
    candidate_tolerance: TimeTolerance,
    allowed_relations: AllowedRelations,
    input_ordering: InputOrdering,
}

impl MatchPolicy {
    /// The default policy: exact tolerances, every relation accepted, no ordering
    /// guarantee asserted. Equivalent to `MatchPolicy::default()`.
    pub fn new() -> Self {
        Self {
            anchor_tolerance: TimeTolerance::NONE,
            candidate_tolerance: TimeTolerance::NONE,
            allowed_relations: AllowedRelations::ANY,
            input_ordering: InputOrdering::None,
        }
    }

    pub fn with_anchor_tolerance(mut self, tolerance: TimeTolerance) -> Self {
        self.anchor_tolerance = tolerance;
        self
    }

    pub fn with_candidate_tolerance(mut self, tolerance: TimeTolerance) -> Self {
        self.candidate_tolerance = tolerance;
        self
    }

    pub fn with_allowed_relations(mut self, relations: AllowedRelations) -> Self {
        self.allowed_relations = relations;
        self
    }

    pub fn with_input_ordering(mut self, ordering: InputOrdering) -> Self {
        self.input_ordering = ordering;
        self
    }

    pub const fn anchor_tolerance(&self) -> TimeTolerance {
        self.anchor_tolerance
    }

    pub const fn candidate_tolerance(&self) -> TimeTolerance {
        self.candidate_tolerance
    }

    pub const fn allowed_relations(&self) -> AllowedRelations {
        self.allowed_relations
    }

    pub const fn input_ordering(&self) -> InputOrdering {
        self.input_ordering
    }
}

/// Classification of a produced match, driven by which side(s) are effectively
/// intervals once tolerance expansion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Both sides are points and both tolerances are exact: the match is a bare
    /// instant equality.
    PointExact,
    /// At least one side is intrinsically a point under an exact tolerance, the
    /// opposite side an interval; classical "point within interval" containment.
    /// No Allen relation is carried.
    PointInInterval,
    /// Both sides are effectively non-degenerate intervals (or a side was widened to
    /// one by a non-exact tolerance); the Allen relation between them is carried.
    Interval,
}

impl MatchType {
    pub const fn carries_relation(self) -> bool {
        matches!(self, MatchType::Interval)
    }
}

/// Decide the [`MatchType`] of a match given the effective (possibly tolerance-expanded)
/// width of each side, per the Open Question decision recorded in DESIGN.md:
/// classify as `Interval` iff at least one side's effective extent is non-degenerate;
/// otherwise `PointExact` if both are degenerate, else `PointInInterval`.
pub(crate) fn classify_match_type(anchor_degenerate: bool, candidate_degenerate: bool) -> MatchType {
    match (anchor_degenerate, candidate_degenerate) {
        (true, true) => MatchType::PointExact,
        (true, false) | (false, true) => MatchType::PointInInterval,
        (false, false) => MatchType::Interval,
    }
}
