//! The matching strategies: shared validation, shared classification, and one
//! submodule per entity-kind pairing.
//!
//! Every public `match_*` entry point in this crate funnels through
//! [`classify_and_filter`], so the equivalence requirement of spec §8 property 3 falls
//! out of construction rather than needing to be proven separately per strategy: all
//! three strategies narrow the set of candidates considered for a given anchor, but
//! never change how a considered candidate is judged.

pub mod interval_interval;
pub mod interval_point;
pub mod point_interval;
pub mod point_point;

use crate::entity::{is_well_formed, TemporalInterval, TemporalPoint};
use crate::error::{MatchError, Side};
use crate::filter::AllowedRelations;
use crate::instant::Instant;
use crate::policy::{classify_match_type, MatchType};
use crate::relation::{allen, TemporalRelation};

/// Judge a single (anchor, candidate) pair given their tolerance-expanded windows.
///
/// When both windows are non-degenerate (or were widened to be so by a non-exact
/// tolerance), the match carries the Allen relation between them and is subject to
/// `allowed`. When at least one window is degenerate — the common case of an exact
/// point under an exact tolerance — the match is a plain containment/equality test
/// with no relation to filter on, per the worked examples of spec §8: a `PointExact`
/// or `PointInInterval` match is never excluded by `allowed_relations`, only by
/// whether the windows actually overlap.
pub(crate) fn classify_and_filter(
    a_lo: Instant,
    a_hi: Instant,
    c_lo: Instant,
    c_hi: Instant,
    allowed: AllowedRelations,
) -> Option<(MatchType, Option<TemporalRelation>)> {
    let match_type = classify_match_type(a_lo == a_hi, c_lo == c_hi);
    if match_type.carries_relation() {
        let relation = allen(a_lo, a_hi, c_lo, c_hi);
        if !allowed.accepts(relation) {
            return None;
        }
        Some((match_type, Some(relation)))
    } else if a_lo <= c_hi && c_lo <= a_hi {
        Some((match_type, None))
    } else {
        None
    }
}

/// Verify a point sequence is non-decreasing by `at()`, failing with
/// [`MatchError::UnsortedInput`] at the first violation.
pub(crate) fn validate_points_sorted<P: TemporalPoint>(
    items: &[P],
    side: Side,
) -> Result<(), MatchError> {
    for (i, w) in items.windows(2).enumerate() {
        if w[1].at() < w[0].at() {
            return Err(MatchError::UnsortedInput {
                side,
                index: i + 1,
            });
        }
    }
    Ok(())
}

/// Verify an interval sequence is non-decreasing by `start()`, failing with
/// [`MatchError::UnsortedInput`] at the first violation.
pub(crate) fn validate_intervals_sorted<I: TemporalInterval>(
    items: &[I],
    side: Side,
) -> Result<(), MatchError> {
    for (i, w) in items.windows(2).enumerate() {
        if w[1].start() < w[0].start() {
            return Err(MatchError::UnsortedInput {
                side,
                index: i + 1,
            });
        }
    }
    Ok(())
}

/// Verify every interval in a sequence satisfies Invariant I1 (`start <= end`).
pub(crate) fn validate_intervals_well_formed<I: TemporalInterval>(
    items: &[I],
    side: Side,
) -> Result<(), MatchError> {
    for (i, item) in items.iter().enumerate() {
        if !is_well_formed(item) {
            return Err(MatchError::InvalidInterval { side, index: i });
        }
    }
    Ok(())
}
