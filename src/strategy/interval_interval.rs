//! Interval→Interval matching: the full Allen relation between two intervals.
//!
//! Only `Brute` is defined for this family (spec §4.E). The reference path always
//! classifies every pair; it never takes the optional disjoint-pair shortcut the
//! specification permits but does not require, since that shortcut only pays off
//! when `Before`/`After` are themselves excluded from the mask, and this path is the
//! one exercised by the equivalence tests.

use smallvec::SmallVec;

use crate::entity::TemporalInterval;
use crate::error::{MatchError, Side};
use crate::pair::{MatchGroup, MatchPair};
use crate::policy::{InputOrdering, MatchPolicy};
use crate::sink::{TryGroupSink, TryPairSink};

use super::{classify_and_filter, validate_intervals_sorted, validate_intervals_well_formed};

fn validate<A: TemporalInterval, C: TemporalInterval>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
) -> Result<(), MatchError> {
    validate_intervals_well_formed(anchors, Side::Anchor)?;
    validate_intervals_well_formed(candidates, Side::Candidate)?;
    match policy.input_ordering() {
        InputOrdering::None => {}
        InputOrdering::CandidatesSorted => {
            validate_intervals_sorted(candidates, Side::Candidate)?;
        }
        InputOrdering::BothSorted => {
            validate_intervals_sorted(anchors, Side::Anchor)?;
            validate_intervals_sorted(candidates, Side::Candidate)?;
        }
    }
    Ok(())
}

pub fn match_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalInterval,
    C: TemporalInterval,
    S: TryPairSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "interval_interval::match_pairs"
    );
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_interval(a.start(), a.end());
        let mut matched = false;
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_interval(c.start(), c.end());
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

pub fn match_groups<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalInterval,
    C: TemporalInterval,
    S: TryGroupSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "interval_interval::match_groups"
    );
    let mut scratch: SmallVec<[&C; 8]> = SmallVec::new();
    for a in anchors {
        scratch.clear();
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_interval(a.start(), a.end());
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_interval(c.start(), c.end());
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

pub fn match_buffer<'a, A, C>(
    anchors: &'a [A],
    candidates: &'a [C],
    policy: &MatchPolicy,
    buffer: &mut [MatchPair<'a, A, C>],
) -> Result<usize, MatchError>
where
    A: TemporalInterval,
    C: TemporalInterval,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "interval_interval::match_buffer"
    );
    let mut written = 0usize;
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_interval(a.start(), a.end());
        for c in candidates {
            let (c_lo, c_hi) = policy.candidate_tolerance().expand_interval(c.start(), c.end());
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
