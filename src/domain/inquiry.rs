//! Sale and viewing inquiries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::booking::Contact;
use super::error::DomainError;
use super::id::{InquiryId, PropertyId};
use super::tour::TourSchedule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    #[default]
    General,
    Viewing,
    Offer,
}

impl InquiryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Viewing => "viewing",
            Self::Offer => "offer",
        }
    }
}

impl fmt::Display for InquiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "viewing" => Ok(Self::Viewing),
            "offer" => Ok(Self::Offer),
            _ => Err(DomainError::InvalidField {
                field: "inquiryType",
                reason: format!("expected general, viewing or offer, got '{s}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

impl InquiryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for InquiryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "closed" => Ok(Self::Closed),
            other => Err(DomainError::InvalidField {
                field: "status",
                reason: format!("unknown inquiry status '{other}'"),
            }),
        }
    }
}

/// Requested viewing tour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// An inquiry ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub property_id: PropertyId,
    pub client: Contact,
    pub message: Option<String>,
    pub kind: InquiryKind,
    pub tour: Option<TourRequest>,
}

impl NewInquiry {
    /// Validate contact details and, for viewings, the requested tour slot.
    ///
    /// # Errors
    /// Returns the first invalid field.
    pub fn validate(&self, tours: &TourSchedule, today: NaiveDate) -> Result<(), DomainError> {
        self.client.validate("clientName", "clientEmail")?;
        let Some(tour) = self.tour else {
            return Ok(());
        };
        if self.kind != InquiryKind::Viewing {
            return Err(DomainError::InvalidField {
                field: "tourDate",
                reason: "only viewing inquiries can request a tour".into(),
            });
        }
        if !tours.is_bookable(tour.date, tour.time, today) {
            return Err(DomainError::TourSlotUnavailable {
                date: tour.date,
                time: tour.time.format("%H:%M").to_string(),
            });
        }
        Ok(())
    }
}

/// A stored inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub id: InquiryId,
    pub property_id: PropertyId,
    pub client: Contact,
    pub message: Option<String>,
    pub kind: InquiryKind,
    pub tour: Option<TourRequest>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
