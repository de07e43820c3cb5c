//! Rental stay requests: validation and quoting.

use chrono::NaiveDate;

use super::availability::AvailabilityConfig;
use super::error::DomainError;
use super::pricing::{PricingConfig, StayQuote};
use super::property::{Property, PropertyKind};

/// A requested rental stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl StayRequest {
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Check the request against the property's house terms and calendar,
    /// then price it.
    ///
    /// # Errors
    /// [`DomainError::NotBookable`] for a sale listing, otherwise the first
    /// failed rule: range order, guest count, minimum stay, booking window,
    /// availability.
    pub fn quote(
        &self,
        property: &Property,
        pricing: &PricingConfig,
        availability: &AvailabilityConfig,
        today: NaiveDate,
    ) -> Result<StayQuote, DomainError> {
        if property.kind() != PropertyKind::Rental {
            return Err(DomainError::NotBookable);
        }
        if self.check_out <= self.check_in {
            return Err(DomainError::InvalidStay {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        if self.guests < 1 {
            return Err(DomainError::InvalidField {
                field: "guestsCount",
                reason: format!("must be at least 1, got {}", self.guests),
            });
        }

        let terms = &property.details.terms;
        if let Some(max_guests) = terms.max_guests {
            if self.guests > max_guests {
                return Err(DomainError::TooManyGuests {
                    guests: self.guests,
                    max_guests,
                });
            }
        }
        if let Some(min_stay) = terms.min_stay {
            if self.nights() < i64::from(min_stay) {
                return Err(DomainError::StayTooShort {
                    nights: self.nights(),
                    min_stay,
                });
            }
        }

        let first = today;
        let last = availability.window_end(today).succ_opt().unwrap_or(NaiveDate::MAX);
        if self.check_in < first {
            return Err(DomainError::OutsideWindow {
                field: "checkInDate",
                date: self.check_in,
                first,
                last,
            });
        }
        if self.check_out > last {
            return Err(DomainError::OutsideWindow {
                field: "checkOutDate",
                date: self.check_out,
                first,
                last,
            });
        }

        let dates =
            availability.unavailable_nights(property, self.check_in, self.check_out, today);
        if !dates.is_empty() {
            return Err(DomainError::DatesUnavailable { dates });
        }

        Ok(pricing.price_stay(property.listing_price(), self.check_in, self.check_out))
    }
}
