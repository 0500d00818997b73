//! Property-based tests for the universal properties of spec §8.

use std::collections::BTreeSet;

use proptest::prelude::*;

use temporal_match::sink::RecordingPairSink;
use temporal_match::{
    match_point_to_point, AllowedRelations, Duration, Instant, InputOrdering, MatchError,
    MatchPair, MatchPolicy, MatchType, TemporalInterval, TemporalPoint, TemporalRelation,
    TimeTolerance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point(i64);

impl TemporalPoint for Point {
    fn at(&self) -> Instant {
        Instant::from_millis(self.0)
    }
}

struct Span {
    start: Instant,
    end: Instant,
}

impl TemporalInterval for Span {
    fn start(&self) -> Instant {
        self.start
    }
    fn end(&self) -> Instant {
        self.end
    }
}

fn quadruple() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (-1000i64..1000, -1000i64..1000, -1000i64..1000, -1000i64..1000).prop_map(
        |(a, b, c, d)| {
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            let (c, d) = if c <= d { (c, d) } else { (d, c) };
            (a, b, c, d)
        },
    )
}

proptest! {
    /// Property 1: Allen totality — classification never panics and always
    /// produces one of the 13 relations (guaranteed by the enum's exhaustiveness;
    /// here we assert the call completes for every well-formed quadruple).
    #[test]
    fn allen_totality((a_start, a_end, b_start, b_end) in quadruple()) {
        let relation = temporal_match::relation::allen(
            Instant::from_millis(a_start),
            Instant::from_millis(a_end),
            Instant::from_millis(b_start),
            Instant::from_millis(b_end),
        );
        prop_assert!(TemporalRelation::ALL.contains(&relation));
    }

    /// Property 2: Allen inverse — swapping the operands yields the converse relation.
    #[test]
    fn allen_inverse((a_start, a_end, b_start, b_end) in quadruple()) {
        let forward = temporal_match::relation::allen(
            Instant::from_millis(a_start),
            Instant::from_millis(a_end),
            Instant::from_millis(b_start),
            Instant::from_millis(b_end),
        );
        let backward = temporal_match::relation::allen(
            Instant::from_millis(b_start),
            Instant::from_millis(b_end),
            Instant::from_millis(a_start),
            Instant::from_millis(a_end),
        );
        prop_assert_eq!(forward.inverse(), backward);
    }

    /// Property 3: strategy equivalence for P→P — brute, candidates-sorted, and
    /// both-sorted emit the same matches and misses once inputs are actually sorted.
    #[test]
    fn strategy_equivalence(
        mut anchors in prop::collection::vec(-50i64..50, 0..12),
        mut candidates in prop::collection::vec(-50i64..50, 0..12),
        before in 0i64..5,
        after in 0i64..5,
    ) {
        anchors.sort_unstable();
        candidates.sort_unstable();
        let anchors: Vec<Point> = anchors.into_iter().map(Point).collect();
        let candidates: Vec<Point> = candidates.into_iter().map(Point).collect();
        let tol = TimeTolerance::new(Duration::from_millis(before), Duration::from_millis(after)).unwrap();

        let brute = MatchPolicy::new().with_anchor_tolerance(tol);
        let mut brute_sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &brute, &mut brute_sink).unwrap();

        let sorted = MatchPolicy::new()
            .with_anchor_tolerance(tol)
            .with_input_ordering(InputOrdering::CandidatesSorted);
        let mut sorted_sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &sorted, &mut sorted_sink).unwrap();

        let both = MatchPolicy::new()
            .with_anchor_tolerance(tol)
            .with_input_ordering(InputOrdering::BothSorted);
        let mut both_sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &both, &mut both_sink).unwrap();

        prop_assert_eq!(&brute_sink.matches, &sorted_sink.matches);
        prop_assert_eq!(&brute_sink.matches, &both_sink.matches);
        prop_assert_eq!(&brute_sink.misses, &sorted_sink.misses);
        prop_assert_eq!(&brute_sink.misses, &both_sink.misses);
    }

    /// Property 4: miss completeness — every anchor is either matched at least once
    /// or reported exactly once as a miss, never both, never neither.
    #[test]
    fn miss_completeness(
        anchors in prop::collection::vec(-50i64..50, 0..12),
        candidates in prop::collection::vec(-50i64..50, 0..12),
    ) {
        let anchors: Vec<Point> = anchors.into_iter().map(Point).collect();
        let candidates: Vec<Point> = candidates.into_iter().map(Point).collect();
        let mut sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &MatchPolicy::new(), &mut sink).unwrap();

        let matched: BTreeSet<i64> = sink.matches.iter().map(|m| m.anchor.0).collect();
        let missed: BTreeSet<i64> = sink.misses.iter().map(|a| a.0).collect();
        prop_assert!(matched.is_disjoint(&missed));
        let all: BTreeSet<i64> = anchors.iter().map(|a| a.0).collect();
        let covered: BTreeSet<i64> = matched.union(&missed).copied().collect();
        prop_assert_eq!(all, covered);
    }

    /// Property 5: tolerance monotonicity — enlarging the anchor tolerance never
    /// removes a previously emitted match.
    #[test]
    fn tolerance_monotonicity(
        anchors in prop::collection::vec(-50i64..50, 0..10),
        candidates in prop::collection::vec(-50i64..50, 0..10),
        small in 0i64..3,
        grow in 0i64..5,
    ) {
        let anchors: Vec<Point> = anchors.into_iter().map(Point).collect();
        let candidates: Vec<Point> = candidates.into_iter().map(Point).collect();

        let tight = TimeTolerance::symmetric(Duration::from_millis(small)).unwrap();
        let loose = TimeTolerance::symmetric(Duration::from_millis(small + grow)).unwrap();

        let mut tight_sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &MatchPolicy::new().with_anchor_tolerance(tight), &mut tight_sink).unwrap();

        let mut loose_sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &MatchPolicy::new().with_anchor_tolerance(loose), &mut loose_sink).unwrap();

        let tight_pairs: BTreeSet<(i64, i64)> = tight_sink.matches.iter().map(|m| (m.anchor.0, m.candidate.0)).collect();
        let loose_pairs: BTreeSet<(i64, i64)> = loose_sink.matches.iter().map(|m| (m.anchor.0, m.candidate.0)).collect();
        prop_assert!(tight_pairs.is_subset(&loose_pairs));
    }

    /// Property 6: exact-tolerance identity — with exact tolerances and ANY
    /// relations, P→P emits `(a, c)` iff `a.at == c.at`.
    #[test]
    fn exact_tolerance_identity(
        anchors in prop::collection::vec(-20i64..20, 0..10),
        candidates in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let anchors: Vec<Point> = anchors.into_iter().map(Point).collect();
        let candidates: Vec<Point> = candidates.into_iter().map(Point).collect();
        let policy = MatchPolicy::new().with_allowed_relations(AllowedRelations::ANY);
        let mut sink = RecordingPairSink::default();
        match_point_to_point(&anchors, &candidates, &policy, &mut sink).unwrap();

        let expected: BTreeSet<(i64, i64)> = anchors
            .iter()
            .flat_map(|a| candidates.iter().filter(move |c| c.0 == a.0).map(move |c| (a.0, c.0)))
            .collect();
        let actual: BTreeSet<(i64, i64)> = sink.matches.iter().map(|m| (m.anchor.0, m.candidate.0)).collect();
        prop_assert_eq!(expected, actual);
    }
}

#[test]
fn round_trip_match_pair_validity() {
    let (a, c) = (Point(1), Point(2));

    assert_eq!(
        MatchPair::new(&a, &c, MatchType::Interval, None).unwrap_err(),
        MatchError::InvalidMatchPair
    );
    assert_eq!(
        MatchPair::new(&a, &c, MatchType::PointExact, Some(TemporalRelation::Equal)).unwrap_err(),
        MatchError::InvalidMatchPair
    );
    assert_eq!(
        MatchPair::new(&a, &c, MatchType::PointInInterval, Some(TemporalRelation::During))
            .unwrap_err(),
        MatchError::InvalidMatchPair
    );

    assert!(MatchPair::new(&a, &c, MatchType::PointExact, None).is_ok());
    assert!(MatchPair::new(&a, &c, MatchType::Interval, Some(TemporalRelation::Meets)).is_ok());
}

#[test]
fn degenerate_span_is_accepted_as_well_formed() {
    let span = Span {
        start: Instant::from_millis(5),
        end: Instant::from_millis(5),
    };
    assert_eq!(span.start(), span.end());
}
