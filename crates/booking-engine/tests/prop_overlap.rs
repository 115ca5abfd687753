//! Property-based tests for overlap detection using proptest.
//!
//! These verify invariants that must hold for *any* valid, already-normalized
//! event list, not just the specific examples in `overlap_tests.rs`.

use booking_engine::{find_double_booked, Event, OverlapPair};
use proptest::prelude::*;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Strategies — generate already-normalized event lists
// ---------------------------------------------------------------------------

/// Generate a list of UTC events on one day with arbitrary minute ranges.
/// Ids are assigned 1..=n, so they are unique within the list; endpoint
/// order is unconstrained (inverted ranges are valid input).
fn arb_events(max_len: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..24 * 60, 0u32..24 * 60), 0..max_len).prop_map(|ranges| {
        ranges
            .into_iter()
            .enumerate()
            .map(|(i, (s, e))| Event {
                id: i as i64 + 1,
                start: format!("2023-02-02 {:02}:{:02}", s / 60, s % 60),
                end: format!("2023-02-02 {:02}:{:02}", e / 60, e % 60),
                timezone: "UTC".to_string(),
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn unordered(pairs: &[OverlapPair]) -> HashSet<(i64, i64)> {
    pairs
        .iter()
        .map(|p| if p[0] <= p[1] { (p[0], p[1]) } else { (p[1], p[0]) })
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: No duplicate unordered pairs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_duplicate_unordered_pairs(events in arb_events(24)) {
        let pairs = find_double_booked(&events).expect("valid input must not fail");

        prop_assert_eq!(
            pairs.len(),
            unordered(&pairs).len(),
            "duplicate unordered pair in {:?}",
            pairs
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every pair references two distinct, existing ids
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn pairs_reference_distinct_existing_ids(events in arb_events(24)) {
        let ids: HashSet<i64> = events.iter().map(|e| e.id).collect();
        let pairs = find_double_booked(&events).expect("valid input must not fail");

        for pair in &pairs {
            prop_assert_ne!(pair[0], pair[1], "self-pair in {:?}", pairs);
            prop_assert!(ids.contains(&pair[0]), "unknown id {} in {:?}", pair[0], pairs);
            prop_assert!(ids.contains(&pair[1]), "unknown id {} in {:?}", pair[1], pairs);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Repeated runs are set-equal despite scheduling races
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn repeated_runs_are_set_equal(events in arb_events(24)) {
        let first = find_double_booked(&events).expect("valid input must not fail");
        let second = find_double_booked(&events).expect("valid input must not fail");

        prop_assert_eq!(unordered(&first), unordered(&second));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Input order is irrelevant to the detected set
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn input_order_is_irrelevant(events in arb_events(24)) {
        let forward = find_double_booked(&events).expect("valid input must not fail");

        let mut reversed = events.clone();
        reversed.reverse();
        let backward = find_double_booked(&reversed).expect("valid input must not fail");

        prop_assert_eq!(unordered(&forward), unordered(&backward));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Touching boundaries alone never produce a pair
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn back_to_back_chain_has_no_pairs(
        boundaries in prop::collection::vec(1u32..=60, 1..10)
    ) {
        // Build a chain of consecutive events where each one starts exactly
        // when the previous one ends.
        let mut events = Vec::new();
        let mut cursor = 0u32;
        for (i, len) in boundaries.iter().enumerate() {
            let start = cursor;
            cursor += len;
            events.push(Event {
                id: i as i64 + 1,
                start: format!("2023-02-02 {:02}:{:02}", start / 60, start % 60),
                end: format!("2023-02-02 {:02}:{:02}", cursor / 60, cursor % 60),
                timezone: "UTC".to_string(),
            });
        }

        let pairs = find_double_booked(&events).expect("valid input must not fail");

        prop_assert!(pairs.is_empty(), "touching events reported: {:?}", pairs);
    }
}
