//! Event data model shared by the normalizer and the overlap detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The one timestamp format accepted and produced by the engine:
/// 24-hour wall clock, no seconds, no offset suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Canonical timezone marker carried by normalized events.
pub const UTC_ZONE: &str = "UTC";

/// Caller-assigned event identifier, unique within a single request.
pub type EventId = i64;

/// A calendar event as supplied by the caller.
///
/// `start` and `end` are wall-clock timestamps in [`TIMESTAMP_FORMAT`],
/// interpreted in `timezone` (an IANA zone name, or [`UTC_ZONE`] once the
/// event has been normalized). Nothing requires `start < end`; the detector
/// works on raw range containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub start: String,
    pub end: String,
    pub timezone: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, start: {}, end: {}, timezone: {}}}",
            self.id, self.start, self.end, self.timezone
        )
    }
}

/// A pair of event ids known to overlap, kept in discovery order.
///
/// `[a, b]` and `[b, a]` name the same conflict; the detector never records
/// an unordered pair twice and never sorts the representative it kept.
pub type OverlapPair = [EventId; 2];

/// Deduplicated list of overlapping pairs, built fresh per call.
pub type OverlapSet = Vec<OverlapPair>;
