//! Domain validation errors.
//!
//! Raised when catalogue input or a stay request violates a domain rule.
//! The HTTP layer turns every variant into a `400 Bad Request`.
//!
//! # Examples
//!
//! ```
//! use luxestate::domain::error::DomainError;
//! use luxestate::domain::search::{RawSearchParams, SearchCriteria};
//!
//! let raw = RawSearchParams {
//!     min_price: Some("cheap".into()),
//!     ..Default::default()
//! };
//!
//! let result = SearchCriteria::from_raw(&raw);
//! assert!(matches!(result, Err(DomainError::InvalidFilter { field: "minPrice", .. })));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A search filter could not be parsed or is out of range.
    #[error("invalid value '{value}' for filter {field}: {reason}")]
    InvalidFilter {
        /// Query parameter name as the client sent it.
        field: &'static str,
        /// The raw value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A required field was absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// A field was present but invalid.
    #[error("invalid value for {field}: {reason}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Unknown property kind.
    #[error("unknown property type '{0}'")]
    UnknownKind(String),

    /// Unknown property status.
    #[error("unknown property status '{0}'")]
    UnknownStatus(String),

    /// Check-out must fall strictly after check-in.
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The stay is shorter than the property's minimum.
    #[error("stay of {nights} night(s) is shorter than the minimum of {min_stay}")]
    StayTooShort { nights: i64, min_stay: i32 },

    /// More guests than the property accepts.
    #[error("{guests} guest(s) exceeds the maximum of {max_guests}")]
    TooManyGuests { guests: i32, max_guests: i32 },

    /// The stay starts before today or ends after the booking window.
    #[error("{field} {date} is outside the booking window ({first} to {last})")]
    OutsideWindow {
        /// `checkInDate` or `checkOutDate`.
        field: &'static str,
        date: NaiveDate,
        /// Earliest check-in.
        first: NaiveDate,
        /// Latest check-out.
        last: NaiveDate,
    },

    /// One or more nights in the stay are booked.
    #[error("dates unavailable: {}", format_dates(.dates))]
    DatesUnavailable { dates: Vec<NaiveDate> },

    /// A booking or inquiry names a property that does not exist.
    #[error("property {id} not found")]
    UnknownProperty { id: i32 },

    /// The property cannot take bookings (missing or not a rental).
    #[error("property not available for booking")]
    NotBookable,

    /// The requested tour slot is not offered.
    #[error("no tour slot at {date} {time}")]
    TourSlotUnavailable { date: NaiveDate, time: String },
}

/// Dates listed in an error message before the rest are counted.
const LISTED_DATES: usize = 10;

fn format_dates(dates: &[NaiveDate]) -> String {
    let listed = dates
        .iter()
        .take(LISTED_DATES)
        .map(NaiveDate::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    match dates.len().saturating_sub(LISTED_DATES) {
        0 => listed,
        more => format!("{listed} and {more} more"),
    }
}

impl DomainError {
    /// The client-facing field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidFilter { field, .. }
            | Self::MissingField { field }
            | Self::InvalidField { field, .. } => Some(field),
            Self::UnknownKind(_) => Some("type"),
            Self::UnknownStatus(_) => Some("status"),
            Self::InvalidStay { .. } | Self::StayTooShort { .. } => Some("checkOutDate"),
            Self::TooManyGuests { .. } => Some("guestsCount"),
            Self::OutsideWindow { field, .. } => Some(field),
            Self::DatesUnavailable { .. } => Some("checkInDate"),
            Self::TourSlotUnavailable { .. } => Some("tourTime"),
            Self::UnknownProperty { .. } => Some("propertyId"),
            Self::NotBookable => None,
        }
    }
}
