//! Double-booking detection over a canonically-referenced event list.
//!
//! Every event is compared against every other event; a pair is reported
//! when an endpoint of one event falls strictly inside the other's open
//! interval. Events that merely touch at a shared boundary are not
//! double-booked. Comparison work is spread across a bounded set of scoped
//! worker threads sharing one lock-protected pair accumulator.

use crate::error::{BookingError, Result};
use crate::event::{Event, EventId, OverlapPair, OverlapSet, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;

/// One event reduced to its parsed time range.
#[derive(Debug, Clone, Copy)]
struct Span {
    id: EventId,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Deduplicated pair collection. The duplicate check and the append happen
/// under a single lock acquisition, so concurrent workers cannot record the
/// same unordered pair twice.
#[derive(Default)]
struct PairSet {
    seen: HashSet<(EventId, EventId)>,
    pairs: Vec<OverlapPair>,
}

impl PairSet {
    fn insert(&mut self, a: EventId, b: EventId) {
        let key = if a <= b { (a, b) } else { (b, a) };
        if self.seen.insert(key) {
            self.pairs.push([a, b]);
        }
    }
}

/// Does an endpoint of `a` fall strictly inside `b`'s open interval?
///
/// Deliberately asymmetric: the caller evaluates both orders of every pair,
/// which also catches full containment. Equal boundaries never match, so
/// back-to-back events are not conflicts.
fn endpoint_within(a: &Span, b: &Span) -> bool {
    (a.start > b.start && a.start < b.end) || (a.end > b.start && a.end < b.end)
}

/// Find all pairs of events whose time ranges overlap.
///
/// Expects events already expressed in one canonical reference (see
/// [`crate::normalize::normalize_to_utc`]); timestamps are compared as plain
/// wall-clock values, the timezone field is not reinterpreted.
///
/// The result contains no duplicate unordered pairs. Each pair keeps
/// whichever representative order was discovered first, so `[3, 2]` and
/// `[2, 3]` are both possible renderings of the same conflict across runs;
/// the *set* of unordered pairs is deterministic.
///
/// # Errors
/// Returns [`BookingError::FindOverlap`] citing the first event whose start
/// or end timestamp fails to parse; no partial result is produced.
pub fn find_double_booked(events: &[Event]) -> Result<OverlapSet> {
    let spans = parse_spans(events)?;
    if spans.len() < 2 {
        return Ok(Vec::new());
    }

    let found = Mutex::new(PairSet::default());

    // Bounded parallel-for: each worker scans a contiguous chunk of outer
    // events against the full list, then the scope joins them all before the
    // result is read back.
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(spans.len());
    let chunk_len = spans.len().div_ceil(workers);

    let spans_ref = &spans;
    let found_ref = &found;
    thread::scope(|scope| {
        for chunk in spans_ref.chunks(chunk_len) {
            scope.spawn(move || {
                for a in chunk {
                    for b in spans_ref {
                        if a.id == b.id {
                            continue;
                        }
                        if endpoint_within(a, b) {
                            found_ref
                                .lock()
                                .expect("pair set lock poisoned")
                                .insert(a.id, b.id);
                        }
                    }
                }
            });
        }
    });

    Ok(found.into_inner().expect("pair set lock poisoned").pairs)
}

/// Parse every event's timestamps up front so the comparison stage cannot
/// fail mid-flight; the first malformed event aborts the whole call.
fn parse_spans(events: &[Event]) -> Result<Vec<Span>> {
    events
        .iter()
        .map(|event| {
            let start = parse_timestamp(&event.start, event)?;
            let end = parse_timestamp(&event.end, event)?;
            Ok(Span {
                id: event.id,
                start,
                end,
            })
        })
        .collect()
}

fn parse_timestamp(timestamp: &str, event: &Event) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| BookingError::FindOverlap(event.clone()))
}
