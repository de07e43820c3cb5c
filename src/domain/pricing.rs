//! Nightly dynamic pricing and stay fees.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::money::Price;

/// Pricing rules for rental stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Nightly rate used when a rental has no `price_per_night`.
    #[serde(default = "default_nightly_rate")]
    pub default_nightly_rate: Decimal,
    /// Applied to Friday and Saturday nights.
    #[serde(default = "default_weekend_multiplier")]
    pub weekend_multiplier: Decimal,
    /// Applied to every night in December.
    #[serde(default = "default_holiday_multiplier")]
    pub holiday_multiplier: Decimal,
    /// Fraction of the subtotal charged as service fee (0.10 = 10%).
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
    /// Flat cleaning fee per stay.
    #[serde(default = "default_cleaning_fee")]
    pub cleaning_fee: Decimal,
}

fn default_nightly_rate() -> Decimal {
    Decimal::from(120)
}

fn default_weekend_multiplier() -> Decimal {
    Decimal::new(13, 1)
}

fn default_holiday_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

fn default_service_fee_rate() -> Decimal {
    Decimal::new(10, 2) // 10%
}

fn default_cleaning_fee() -> Decimal {
    Decimal::from(50)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_nightly_rate: default_nightly_rate(),
            weekend_multiplier: default_weekend_multiplier(),
            holiday_multiplier: default_holiday_multiplier(),
            service_fee_rate: default_service_fee_rate(),
            cleaning_fee: default_cleaning_fee(),
        }
    }
}

/// Price of a single night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub price: Price,
}

/// Priced breakdown of a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub nightly: Vec<NightlyRate>,
    pub subtotal: Price,
    pub service_fee: Price,
    pub cleaning_fee: Price,
    pub total: Price,
}

impl PricingConfig {
    /// Dynamic price of the night starting on `date`.
    ///
    /// Weekend and December multipliers compound; the result is rounded to
    /// a whole unit, half away from zero.
    #[must_use]
    pub fn nightly_price(&self, base: Option<Price>, date: NaiveDate) -> Price {
        let mut price = base.unwrap_or(self.default_nightly_rate);
        if matches!(date.weekday(), Weekday::Fri | Weekday::Sat) {
            price *= self.weekend_multiplier;
        }
        if date.month() == 12 {
            price *= self.holiday_multiplier;
        }
        price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Price every night in `[check_in, check_out)` and add the fees.
    ///
    /// An empty range yields zero nights and only the cleaning fee; range
    /// validation belongs to the caller.
    #[must_use]
    pub fn price_stay(
        &self,
        base: Option<Price>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> StayQuote {
        let nightly: Vec<NightlyRate> = check_in
            .iter_days()
            .take_while(|d| *d < check_out)
            .map(|date| NightlyRate {
                date,
                price: self.nightly_price(base, date),
            })
            .collect();

        let subtotal: Price = nightly.iter().map(|n| n.price).sum();
        let service_fee = (subtotal * self.service_fee_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let total = subtotal + service_fee + self.cleaning_fee;

        StayQuote {
            check_in,
            check_out,
            nights: nightly.len() as i64,
            nightly,
            subtotal,
            service_fee,
            cleaning_fee: self.cleaning_fee,
            total,
        }
    }
}
