//! Point→Interval matching: a point anchor against interval candidates.

use smallvec::SmallVec;

use crate::entity::{TemporalInterval, TemporalPoint};
use crate::error::{MatchError, Side};
use crate::pair::{MatchGroup, MatchPair};
use crate::policy::{InputOrdering, MatchPolicy};
use crate::sink::{TryGroupSink, TryPairSink};

use super::{
    classify_and_filter, validate_intervals_sorted, validate_intervals_well_formed,
    validate_points_sorted,
};

fn validate<A: TemporalPoint, C: TemporalInterval>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
) -> Result<(), MatchError> {
    validate_intervals_well_formed(candidates, Side::Candidate)?;
    match policy.input_ordering() {
        InputOrdering::None => {}
        InputOrdering::CandidatesSorted => {
            validate_intervals_sorted(candidates, Side::Candidate)?;
        }
        InputOrdering::BothSorted => {
            validate_points_sorted(anchors, Side::Anchor)?;
            validate_intervals_sorted(candidates, Side::Candidate)?;
        }
    }
    Ok(())
}

/// The safe index range `[lo, hi)` of `candidates` (sorted by `start()`) worth
/// checking against one anchor's expanded window.
///
/// Only the upper end can be pruned by `start()`: candidates are sorted by `start()`,
/// so once a candidate's expanded `start()` passes `a_hi` every later candidate's
/// does too. The lower end cannot be pruned the same way — an interval's `end()` is
/// unbounded relative to its `start()`, so an early-starting, long candidate can
/// still overlap a late anchor. `classify_and_filter`'s overlap test does the actual
/// filtering within `[0, hi)`.
fn safe_range<C: TemporalInterval>(
    candidates: &[C],
    policy: &MatchPolicy,
    a_hi: crate::instant::Instant,
) -> (usize, usize) {
    let before = policy.candidate_tolerance().before();
    let mut hi = 0;
    while hi < candidates.len() && candidates[hi].start() - before <= a_hi {
        hi += 1;
    }
    (0, hi)
}

pub fn match_pairs<A, C, S>(
    anchors: &[A],
    candidates: &[C],
    policy: &MatchPolicy,
    sink: &mut S,
) -> Result<(), MatchError>
where
    A: TemporalPoint,
    C: TemporalInterval,
    S: TryPairSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        ordering = ?policy.input_ordering(),
        "point_interval::match_pairs"
    );
    let sorted = matches!(
        policy.input_ordering(),
        InputOrdering::CandidatesSorted | InputOrdering::BothSorted
    );
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
        let (lo, hi) = if sorted {
            safe_range(candidates, policy, a_hi)
        } else {
            (0, candidates.len())
        };
        let mut matched = false;
        for c in &candidates[lo..hi] {
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
    A: TemporalPoint,
    C: TemporalInterval,
    S: TryGroupSink<A, C>,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "point_interval::match_groups"
    );
    let mut scratch: SmallVec<[&C; 8]> = SmallVec::new();
    for a in anchors {
        scratch.clear();
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
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
    A: TemporalPoint,
    C: TemporalInterval,
{
    validate(anchors, candidates, policy)?;
    tracing::debug!(
        anchors = anchors.len(),
        candidates = candidates.len(),
        "point_interval::match_buffer"
    );
    let mut written = 0usize;
    for a in anchors {
        let (a_lo, a_hi) = policy.anchor_tolerance().expand_point(a.at());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;
    use crate::policy::MatchType;
    use crate::sink::RecordingPairSink;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Pt(i64);
    impl TemporalPoint for Pt {
        fn at(&self) -> Instant {
            Instant::from_millis(self.0)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Span(i64, i64);
    impl TemporalInterval for Span {
        fn start(&self) -> Instant {
            Instant::from_millis(self.0)
        }
        fn end(&self) -> Instant {
            Instant::from_millis(self.1)
        }
    }

    #[test]
    fn scenario_point_in_interval_containment() {
        let anchors = vec![Pt(5), Pt(15), Pt(25)];
        let candidates = vec![Span(0, 10), Span(20, 30), Span(40, 50)];
        let policy = MatchPolicy::new();
        let mut sink = RecordingPairSink::default();
        match_pairs(&anchors, &candidates, &policy, &mut sink).unwrap();

        let matched: Vec<(i64, (i64, i64))> = sink
            .matches
            .iter()
            .map(|m| (m.anchor.0, (m.candidate.0, m.candidate.1)))
            .collect();
        assert_eq!(matched, vec![(5, (0, 10)), (25, (20, 30))]);
        assert!(sink
            .matches
            .iter()
            .all(|m| m.match_type == MatchType::PointInInterval));
        assert_eq!(sink.misses, vec![Pt(15)]);
    }

    #[test]
    fn malformed_candidate_interval_is_rejected() {
        let anchors = vec![Pt(5)];
        let candidates = vec![Span(10, 0)];
        let policy = MatchPolicy::new();
        let mut sink = RecordingPairSink::default();
        let err = match_pairs(&anchors, &candidates, &policy, &mut sink).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidInterval {
                side: Side::Candidate,
                index: 0
            }
        );
    }

    #[test]
    fn sorted_strategy_matches_brute() {
        let anchors = vec![Pt(5), Pt(15), Pt(25)];
        let candidates = vec![Span(0, 10), Span(20, 30), Span(40, 50)];
        let brute = MatchPolicy::new();
        let mut brute_sink = RecordingPairSink::default();
        match_pairs(&anchors, &candidates, &brute, &mut brute_sink).unwrap();

        let sorted = MatchPolicy::new().with_input_ordering(InputOrdering::CandidatesSorted);
        let mut sorted_sink = RecordingPairSink::default();
        match_pairs(&anchors, &candidates, &sorted, &mut sorted_sink).unwrap();

        assert_eq!(brute_sink.matches, sorted_sink.matches);
        assert_eq!(brute_sink.misses, sorted_sink.misses);
    }

    /// A long-lived candidate interval starting well before the anchor must still be
    /// found under `CandidatesSorted` — `safe_range` must not prune it by `start()`.
    #[test]
    fn sorted_strategy_finds_long_candidate_starting_before_anchor() {
        let anchors = vec![Pt(100)];
        let candidates = vec![Span(0, 150)];
        let brute = MatchPolicy::new();
        let mut brute_sink = RecordingPairSink::default();
        match_pairs(&anchors, &candidates, &brute, &mut brute_sink).unwrap();
        assert_eq!(brute_sink.matches.len(), 1);

        let sorted = MatchPolicy::new().with_input_ordering(InputOrdering::CandidatesSorted);
        let mut sorted_sink = RecordingPairSink::default();
        match_pairs(&anchors, &candidates, &sorted, &mut sorted_sink).unwrap();

        assert_eq!(brute_sink.matches, sorted_sink.matches);
        assert_eq!(brute_sink.misses, sorted_sink.misses);
    }

    #[test]
    fn unsorted_anchors_are_rejected_under_both_sorted() {
        let anchors = vec![Pt(15), Pt(5)];
        let candidates = vec![Span(0, 10)];
        let policy = MatchPolicy::new().with_input_ordering(InputOrdering::BothSorted);
        let mut sink = RecordingPairSink::default();
        let err = match_pairs(&anchors, &candidates, &policy, &mut sink).unwrap_err();
        assert_eq!(
            err,
            MatchError::UnsortedInput {
                side: Side::Anchor,
                index: 1
            }
        );
    }
}
