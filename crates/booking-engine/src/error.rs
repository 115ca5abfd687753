//! Error types for booking-engine operations.
//!
//! One closed enum covers both stages. The adapter layer derives its error
//! envelope fields (machine code, id tag, status) from the variant through
//! the accessors below, so no caller ever inspects error types at runtime.

use crate::event::Event;
use thiserror::Error;

/// Machine code for normalization failures.
pub const CODE_PARSE_EVENT_ERROR: &str = "CODE_PARSE_EVENT_ERROR";
/// Machine code for detection failures.
pub const CODE_FIND_DOUBLE_BOOKED_ERROR: &str = "CODE_FIND_DOUBLE_BOOKED_ERROR";
/// Machine code for anything unclassified.
pub const CODE_GENERAL_ERROR: &str = "CODE_GENERAL_ERROR";

/// Id tag shared by all double-booking business errors.
pub const ID_DOUBLE_BOOKED_ERROR: &str = "ID_DOUBLE_BOOKED_ERROR";
/// Id tag for unclassified errors.
pub const ID_GENERAL_ERROR: &str = "ID_GENERAL_ERROR";

/// Suggested status code for business-rule failures.
pub const STATUS_BUSINESS_ERROR: u16 = 280;
/// Suggested status code for unclassified failures.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Errors raised while normalizing or comparing an event list.
///
/// Every variant is fail-fast: the whole request is rejected, no partial
/// result accompanies an error. An empty overlap set is a success, never an
/// error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The event names a timezone that is not a valid IANA identifier.
    #[error("error resolving timezone of event {0}")]
    InvalidTimezone(Event),

    /// A start/end timestamp could not be parsed in the fixed format, or
    /// does not exist on the event timezone's local timeline
    /// (spring-forward gap).
    #[error("error parsing timestamp of event {0}")]
    InvalidTimestamp(Event),

    /// A timestamp of an already-normalized event failed to parse during
    /// overlap detection.
    #[error("error parsing timestamp of normalized event {0}")]
    FindOverlap(Event),

    /// Anything outside the domain taxonomy, e.g. a malformed request body.
    #[error("{0}")]
    Unclassified(String),
}

impl BookingError {
    /// Machine code for the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::InvalidTimezone(_) | BookingError::InvalidTimestamp(_) => {
                CODE_PARSE_EVENT_ERROR
            }
            BookingError::FindOverlap(_) => CODE_FIND_DOUBLE_BOOKED_ERROR,
            BookingError::Unclassified(_) => CODE_GENERAL_ERROR,
        }
    }

    /// Short id tag for the error envelope.
    pub fn id_tag(&self) -> &'static str {
        match self {
            BookingError::InvalidTimezone(_)
            | BookingError::InvalidTimestamp(_)
            | BookingError::FindOverlap(_) => ID_DOUBLE_BOOKED_ERROR,
            BookingError::Unclassified(_) => ID_GENERAL_ERROR,
        }
    }

    /// Suggested externally-visible status code.
    pub fn status(&self) -> u16 {
        match self {
            BookingError::InvalidTimezone(_)
            | BookingError::InvalidTimestamp(_)
            | BookingError::FindOverlap(_) => STATUS_BUSINESS_ERROR,
            BookingError::Unclassified(_) => STATUS_INTERNAL_ERROR,
        }
    }
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
