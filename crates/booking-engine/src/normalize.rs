//! Timezone normalization -- converts event wall-clock times to UTC.
//!
//! Each event's timestamps are interpreted on the local timeline of the
//! event's own IANA timezone, then re-rendered in the same fixed format
//! against UTC, so the overlap detector can compare every event on a single
//! time basis.

use crate::error::{BookingError, Result};
use crate::event::{Event, TIMESTAMP_FORMAT, UTC_ZONE};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Convert every event in the list to the canonical UTC reference.
///
/// Output preserves input order and ids; only the timestamps and the
/// timezone marker change. Normalizing a list already expressed in UTC
/// leaves the timestamps unchanged.
///
/// The call is all-or-nothing: the first event with an unknown timezone or
/// an unparseable timestamp fails the whole list, nothing partial is
/// returned.
///
/// DST handling: an ambiguous wall-clock time (fall-back hour) resolves to
/// the earlier of the two instants, the timezone database's standard
/// disambiguation as exposed by chrono's `earliest()`; a nonexistent
/// wall-clock time (spring-forward gap) is rejected.
///
/// # Errors
/// Returns [`BookingError::InvalidTimezone`] if the zone name is not a valid
/// IANA identifier, [`BookingError::InvalidTimestamp`] if a timestamp cannot
/// be parsed or placed on the zone's local timeline. Both carry the full
/// offending event.
pub fn normalize_to_utc(events: &[Event]) -> Result<Vec<Event>> {
    let mut normalized = Vec::with_capacity(events.len());

    for event in events {
        let tz: Tz = event
            .timezone
            .parse()
            .map_err(|_| BookingError::InvalidTimezone(event.clone()))?;

        let start = to_utc(&event.start, tz, event)?;
        let end = to_utc(&event.end, tz, event)?;

        normalized.push(Event {
            id: event.id,
            start,
            end,
            timezone: UTC_ZONE.to_string(),
        });
    }

    Ok(normalized)
}

/// Interpret one wall-clock timestamp in `tz` and re-render it in UTC.
fn to_utc(timestamp: &str, tz: Tz, event: &Event) -> Result<String> {
    let naive = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| BookingError::InvalidTimestamp(event.clone()))?;

    // `earliest()` picks the pre-transition instant for ambiguous times and
    // yields nothing for times inside a spring-forward gap.
    let local = naive
        .and_local_timezone(tz)
        .earliest()
        .ok_or_else(|| BookingError::InvalidTimestamp(event.clone()))?;

    let utc: DateTime<Utc> = local.with_timezone(&Utc);
    Ok(utc.format(TIMESTAMP_FORMAT).to_string())
}
