//! Point→Point matching: the family that defines all three strategies.

use smallvec::SmallVec;

use crate::entity::TemporalPoint;
use crate::error::{MatchError, Side};
use crate::pair::{MatchGroup, MatchPair};
use crate::policy::{InputOrdering, MatchPolicy};
use crate::sink::{TryGroupSink, TryPairSink};

use super::{classify_and_filter, validate_points_sorted};

fn validate<A: TemporalPoint, C: TemporalPoint>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
) -> Result<(), MatchError> {
    match policy.input_ordering() {
        InputOrdering::None => {}
        InputOrdering::CandidatesSorted => {
            validate_points_sorted(candidates, Side::Candidate)?;
        }
        InputOrdering::BothSorted => {
            validate_points_sorted(anchors, Side::Anchor)?;
            validate_points_sorted(candidates, Side::Candidate)?;
        }
    }
    Ok(())
}

/// Match every anchor against every candidate, emitting through `sink`.
///
/// Dispatches on `policy.input_ordering()`: `None` walks every candidate per anchor,
/// `CandidatesSorted` binary-searches a safe starting point per anchor, and
/// `BothSorted` additionally carries a cursor across anchors. All three emit the
/// same multiset of matches and misses (spec §8 property 3).
pub fn match_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        ordering = ?policy.input_ordering(),
        "point_point::match_pairs"
    );
    match policy.input_ordering() {
        InputOrdering::None => brute_pairs(anchors, candidates, policy, sink),
        InputOrdering::CandidatesSorted => candidates_sorted_pairs(anchors, candidates, policy, sink),
        InputOrdering::BothSorted => both_sorted_pairs(anchors, candidates, policy, sink),
    }
}

fn brute_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        let mut matched = false;
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_point(c.at());
            if let Some((match_type, relation)) =
                classify_and_filter(a_lo, a_hi, c_lo, c_hi, policy.allowed_relations())
            {
                matched = true;
                let pair = MatchPair::new(a, c, match_type, relation)?;
                sink.on_match(&pair).map_err(|_| MatchError::SinkFault)?;
            }
        }
        if !matched {
            sink.on_miss(a).map_err(|_| MatchError::SinkFault)?;
        }
    }
    Ok(())
}

/// The safe index range `[lo, hi)` of `candidates` worth checking against one
/// anchor's expanded window, given candidates are sorted non-decreasing by `at()`.
fn safe_range<C: TemporalPoint>(candidates: &[C], policy: &MatchPolicy, a_lo: crate::instant::Instant, a_hi: crate::instant::Instant) -> (usize, usize) {
    let after = policy.candidate_tolerance().after();
    let before = policy.candidate_tolerance().before();
    let lo = candidates.partition_point(|c| c.at() + after < a_lo);
    let mut hi = lo;
    while hi < candidates.len() && candidates[hi].at() - before <= a_hi {
        hi += 1;
    }
    (lo, hi)
}

fn candidates_sorted_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        let (lo, hi) = safe_range(candidates, policy, a_lo, a_hi);
        let mut matched = false;
        for c in &candidates[lo..hi] {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_point(c.at());
            if let Some((match_type, relation)) =
                classify_and_filter(a_lo, a_hi, c_lo, c_hi, policy.allowed_relations())
            {
                matched = true;
                let pair = MatchPair::new(a, c, match_type, relation)?;
                sink.on_match(&pair).map_err(|_| MatchError::SinkFault)?;
            }
        }
        if !matched {
            sink.on_miss(a).map_err(|_| MatchError::SinkFault)?;
        }
    }
    Ok(())
}

fn both_sorted_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryPairSink<A, C>,
{
    let before = policy.candidate_tolerance().before();
    let mut cursor = 0usize;
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        // Advance the cursor past candidates that can never match this or any later
        // anchor (anchors are sorted, so a_lo is non-decreasing).
        while cursor < candidates.len() {
            let (_, c_hi) = policy.candidate_tolerance().expand_point(candidates[cursor].at());
            if c_hi < a_lo {
                cursor += 1;
            } else {
                break;
            }
        }
        let mut matched = false;
        let mut j = cursor;
        while j < candidates.len() {
            let c = &candidates[j];
            if c.at() - before > a_hi {
                break;
            }
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_point(c.at());
            if let Some((match_type, relation)) =
                classify_and_filter(a_lo, a_hi, c_lo, c_hi, policy.allowed_relations())
            {
                matched = true;
                let pair = MatchPair::new(a, c, match_type, relation)?;
                sink.on_match(&pair).map_err(|_| MatchError::SinkFault)?;
            }
            j += 1;
        }
        if !matched {
            sink.on_miss(a).map_err(|_| MatchError::SinkFault)?;
        }
    }
    Ok(())
}

/// Group-sink entry point. Always scans every candidate per anchor — the sorted
/// strategies are realized for [`match_pairs`]; this path stays on the reference
/// algorithm since it already allocates a per-anchor scratch buffer regardless.
pub fn match_groups<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
    S: TryGroupSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "point_point::match_groups"
    );
    let mut scratch: SmallVec<[&C; 8]> = SmallVec::new();
    for a in anchors {
        scratch.clear();
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_point(c.at());
            if classify_and_filter(a_lo, a_hi, c_lo, c_hi, policy.allowed_relations()).is_some() {
                scratch.push(c);
            }
        }
        if scratch.is_empty() {
            sink.on_miss(a).map_err(|_| MatchError::SinkFault)?;
        } else {
            let group = MatchGroup::new(a, scratch.as_slice());
            sink.on_match(&group).map_err(|_| MatchError::SinkFault)?;
        }
    }
    Ok(())
}

/// Buffered-array entry point. Fills `buffer` in emission order and returns the
/// count written; misses are not reported in this mode (spec §4.F).
pub fn match_buffer<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize, MatchError>
where
    A: TemporalPoint,
    C: TemporalPoint,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "point_point::match_buffer"
    );
    let mut written = 0usize;
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_point(c.at());
            if let Some((match_type, relation)) =
                classify_and_filter(a_lo, a_hi, c_lo, c_hi, policy.allowed_relations())
            {
                if written == buffer.len() {
                    return Err(MatchError::BufferExhausted { written });
                }
                buffer[written] = MatchPair::new(a, c, match_type, relation)?;
                written += 1;
            }
        }
    }
    Ok(written)
}
