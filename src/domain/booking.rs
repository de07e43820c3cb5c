//! Rental booking requests.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;
use super::id::{BookingId, PropertyId};
use super::money::Price;
use super::stay::StayRequest;

/// Name, email and optional phone of a guest or client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Contact {
    /// Require a non-blank name and a plausible email address.
    ///
    /// # Errors
    /// [`DomainError::MissingField`] or [`DomainError::InvalidField`] naming
    /// `name_field` / `email_field`.
    pub fn validate(
        &self,
        name_field: &'static str,
        email_field: &'static str,
    ) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingField { field: name_field });
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DomainError::MissingField { field: email_field });
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(())
            }
            _ => Err(DomainError::InvalidField {
                field: email_field,
                reason: format!("'{email}' is not an email address"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::InvalidField {
                field: "status",
                reason: format!("unknown booking status '{other}'"),
            }),
        }
    }
}

/// A booking as submitted, before it is priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub property_id: PropertyId,
    pub guest: Contact,
    pub stay: StayRequest,
    /// Client-side total; the quote total is used when absent.
    pub total_price: Option<Price>,
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Validate the guest details.
    ///
    /// # Errors
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.guest.validate("guestName", "guestEmail")?;
        if let Some(total) = self.total_price {
            if total.is_sign_negative() && !total.is_zero() {
                return Err(DomainError::InvalidField {
                    field: "totalPrice",
                    reason: format!("must not be negative, got {total}"),
                });
            }
        }
        Ok(())
    }

    /// Fix the total price, keeping the client's figure when given.
    #[must_use]
    pub fn into_new_booking(self, quoted_total: Price) -> NewBooking {
        NewBooking {
            property_id: self.property_id,
            guest: self.guest,
            stay: self.stay,
            total_price: self.total_price.unwrap_or(quoted_total),
            special_requests: self.special_requests,
        }
    }
}

/// A priced booking ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub property_id: PropertyId,
    pub guest: Contact,
    pub stay: StayRequest,
    pub total_price: Price,
    pub special_requests: Option<String>,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub property_id: PropertyId,
    pub guest: Contact,
    pub stay: StayRequest,
    pub total_price: Price,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn contact(name: &str, email: &str) -> Contact {
        Contact {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    fn draft(total_price: Option<Price>) -> BookingDraft {
        BookingDraft {
            property_id: PropertyId::new(2),
            guest: contact("Ana Torres", "ana@example.com"),
            stay: StayRequest {
                check_in: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
                guests: 2,
            },
            total_price,
            special_requests: None,
        }
    }

    #[test]
    fn contact_requires_name_and_email() {
        assert_eq!(
            contact(" ", "a@b").validate("guestName", "guestEmail"),
            Err(DomainError::MissingField { field: "guestName" })
        );
        assert_eq!(
            contact("Ana", "").validate("guestName", "guestEmail"),
            Err(DomainError::MissingField { field: "guestEmail" })
        );
    }

    #[test]
    fn contact_rejects_malformed_email() {
        for email in ["ana", "@example.com", "ana@", "a@b@c"] {
            let err = contact("Ana", email)
                .validate("clientName", "clientEmail")
                .unwrap_err();
            assert_eq!(err.field(), Some("clientEmail"), "email {email}");
        }
    }

    #[test]
    fn quoted_total_fills_missing_price() {
        let booking = draft(None).into_new_booking(dec!(1485050));
        assert_eq!(booking.total_price, dec!(1485050));

        let booking = draft(Some(dec!(999))).into_new_booking(dec!(1485050));
        assert_eq!(booking.total_price, dec!(999));
    }

    #[test]
    fn negative_total_is_rejected() {
        let err = draft(Some(dec!(-5))).validate().unwrap_err();
        assert_eq!(err.field(), Some("totalPrice"));
    }

    #[test]
    fn status_parses_stored_values() {
        assert_eq!("confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert!("lost".parse::<BookingStatus>().is_err());
    }
}
