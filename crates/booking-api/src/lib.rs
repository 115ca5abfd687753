//! JSON envelope adapter for the double-booking engine.
//!
//! Maps a raw JSON request body to a status code plus JSON reply body. All
//! domain work happens in `booking-engine`; this crate only deserializes the
//! envelope, runs normalization and detection, and renders either the
//! success payload or the error envelope.
//!
//! A request looks like:
//!
//! ```json
//! {"events": [{"id": 1, "start": "2023-02-02 13:00",
//!              "end": "2023-02-02 14:00", "timezone": "America/Bogota"}]}
//! ```
//!
//! and a successful reply like `{"double_booked_events": [[2, 3]]}`.

use booking_engine::{find_double_booked, normalize_to_utc, BookingError, Event, OverlapSet};
use serde::{Deserialize, Serialize};

/// Title shared by every error entry.
const ERROR_TITLE: &str = "Error";

/// Detail rendered for unclassified failures. Internal error text stays
/// inside the process; the caller only ever sees this fixed message.
const GENERAL_ERROR_DETAIL: &str = "unexpected error while processing the request";

// ---------------------------------------------------------------------------
// Envelope DTOs
// ---------------------------------------------------------------------------

/// Incoming request body: the list of events to check.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub events: Vec<Event>,
}

/// Successful reply body.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub double_booked_events: OverlapSet,
}

/// One entry of the error envelope. `status` is string-encoded.
#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub id: String,
    pub status: String,
    pub code: String,
    pub title: String,
    pub detail: String,
}

/// Error envelope: a list of error entries, exactly one per failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorEntry>,
}

/// A rendered reply: externally-visible status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Handle one raw JSON request body and produce the reply.
///
/// Success is status 200 with `{"double_booked_events": [...]}`. Any failure
/// renders the error envelope with exactly one entry and the status code the
/// error suggests: 280 for business-rule failures (bad timezone or
/// timestamp, detection failure), 500 for anything unclassified.
pub fn handle(body: &str) -> Reply {
    match process(body) {
        Ok(pairs) => render_success(pairs),
        Err(err) => render_error(&err),
    }
}

/// Parse the envelope and run both stages of the core computation.
fn process(body: &str) -> Result<OverlapSet, BookingError> {
    let request: BookingRequest = serde_json::from_str(body)
        .map_err(|e| BookingError::Unclassified(format!("malformed request body: {e}")))?;

    let normalized = normalize_to_utc(&request.events)?;
    find_double_booked(&normalized)
}

fn render_success(pairs: OverlapSet) -> Reply {
    let response = BookingResponse {
        double_booked_events: pairs,
    };
    match serde_json::to_string(&response) {
        Ok(body) => Reply { status: 200, body },
        Err(e) => render_error(&BookingError::Unclassified(format!(
            "response serialization failed: {e}"
        ))),
    }
}

/// Render the error envelope. Domain errors expose their own message (which
/// cites the offending event) as the detail; unclassified errors get the
/// fixed generic detail.
fn render_error(err: &BookingError) -> Reply {
    let detail = match err {
        BookingError::InvalidTimezone(_)
        | BookingError::InvalidTimestamp(_)
        | BookingError::FindOverlap(_) => err.to_string(),
        BookingError::Unclassified(_) => GENERAL_ERROR_DETAIL.to_string(),
    };

    let envelope = ErrorBody {
        errors: vec![ErrorEntry {
            id: err.id_tag().to_string(),
            status: err.status().to_string(),
            code: err.code().to_string(),
            title: ERROR_TITLE.to_string(),
            detail,
        }],
    };

    // A struct of plain strings always serializes.
    let body = serde_json::to_string(&envelope).expect("error envelope serialization");

    Reply {
        status: err.status(),
        body,
    }
}
