//! Rental availability calendar.
//!
//! There is no reservation ledger: dates inside the booking window are
//! drawn from a seeded RNG keyed on property and date, so the same night
//! reads the same way on every request. Per-property overrides win over
//! the draw.

use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::money::Price;
use super::pricing::PricingConfig;
use super::property::Property;

/// Booking window and mock occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Days after today that can be booked.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Probability that a date inside the window is free.
    #[serde(default = "default_availability_rate")]
    pub availability_rate: f64,
}

const fn default_window_days() -> u32 {
    90
}

const fn default_availability_rate() -> f64 {
    0.8
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            availability_rate: default_availability_rate(),
        }
    }
}

/// One day of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub available: bool,
    /// Dynamic nightly price; `None` when the date is not bookable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl AvailabilityConfig {
    /// Last bookable date.
    #[must_use]
    pub fn window_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether the night starting on `date` can be booked.
    #[must_use]
    pub fn is_available(&self, property: &Property, date: NaiveDate, today: NaiveDate) -> bool {
        if date < today || date > self.window_end(today) {
            return false;
        }
        if let Some(&forced) = property.details.availability_overrides.get(&date) {
            return forced;
        }
        self.draw(property.id.get(), date)
    }

    /// Dates in `[check_in, check_out)` that cannot be booked.
    #[must_use]
    pub fn unavailable_nights(
        &self,
        property: &Property,
        check_in: NaiveDate,
        check_out: NaiveDate,
        today: NaiveDate,
    ) -> Vec<NaiveDate> {
        check_in
            .iter_days()
            .take_while(|d| *d < check_out)
            .filter(|d| !self.is_available(property, *d, today))
            .collect()
    }

    /// Calendar from `from` for `days` days, priced with `pricing`.
    #[must_use]
    pub fn calendar(
        &self,
        property: &Property,
        pricing: &PricingConfig,
        from: NaiveDate,
        days: u32,
        today: NaiveDate,
    ) -> Vec<CalendarDay> {
        let base = property.listing_price();
        from.iter_days()
            .take(days as usize)
            .map(|date| {
                let available = self.is_available(property, date, today);
                CalendarDay {
                    date,
                    available,
                    price: available.then(|| pricing.nightly_price(base, date)),
                }
            })
            .collect()
    }

    fn draw(&self, property_id: i32, date: NaiveDate) -> bool {
        let seed = (u64::from(property_id as u32) << 32) ^ u64::from(date.num_days_from_ce() as u32);
        let mut rng = StdRng::seed_from_u64(seed);
        rng.gen_bool(self.availability_rate.clamp(0.0, 1.0))
    }
}

/// Check-in/check-out selection as a guest clicks through the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaySelection {
    #[default]
    Empty,
    CheckIn(NaiveDate),
    Range {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl StaySelection {
    /// Apply a click on `date`. Clicks on unavailable dates are ignored.
    #[must_use]
    pub fn select(self, date: NaiveDate, available: bool) -> Self {
        if !available {
            return self;
        }
        match self {
            Self::CheckIn(check_in) if date > check_in => Self::Range {
                check_in,
                check_out: date,
            },
            _ => Self::CheckIn(date),
        }
    }

    /// The selected range, once both ends are set.
    #[must_use]
    pub const fn range(self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Range {
                check_in,
                check_out,
            } => Some((check_in, check_out)),
            _ => None,
        }
    }

    /// Whether `date` is highlighted by the current selection.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Empty => false,
            Self::CheckIn(check_in) => date == check_in,
            Self::Range {
                check_in,
                check_out,
            } => check_in <= date && date <= check_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::PropertyId;
    use crate::domain::property::{Listing, PropertyDetails, PropertyStatus};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental(id: i32) -> Property {
        Property {
            id: PropertyId::new(id),
            details: PropertyDetails::new(
                "Casa Colonial",
                "Getsemaní, Cartagena",
                Listing::Rental {
                    price_per_night: Some(dec!(380000)),
                },
            ),
            status: PropertyStatus::Available,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn dates_outside_window_are_unavailable() {
        let config = AvailabilityConfig {
            availability_rate: 1.0,
            ..Default::default()
        };
        let today = date(2026, 3, 1);
        let property = rental(1);

        assert!(!config.is_available(&property, date(2026, 2, 28), today));
        assert!(config.is_available(&property, today, today));
        assert!(config.is_available(&property, config.window_end(today), today));
        assert!(!config.is_available(&property, date(2026, 5, 31), today));
    }

    #[test]
    fn window_end_saturates_near_the_last_date() {
        let config = AvailabilityConfig {
            window_days: u32::MAX,
            ..Default::default()
        };
        assert_eq!(config.window_end(date(2026, 3, 1)), NaiveDate::MAX);
        assert_eq!(
            AvailabilityConfig::default().window_end(date(2026, 3, 1)),
            date(2026, 5, 30)
        );
    }

    #[test]
    fn draw_is_stable_per_property_and_date() {
        let config = AvailabilityConfig::default();
        let today = date(2026, 3, 1);
        let property = rental(4);

        let first: Vec<bool> = today
            .iter_days()
            .take(60)
            .map(|d| config.is_available(&property, d, today))
            .collect();
        let second: Vec<bool> = today
            .iter_days()
            .take(60)
            .map(|d| config.is_available(&property, d, today))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn draw_rate_tracks_configuration() {
        let config = AvailabilityConfig {
            window_days: 2000,
            ..Default::default()
        };
        let today = date(2026, 1, 1);
        let property = rental(2);

        let free = today
            .iter_days()
            .take(2000)
            .filter(|d| config.is_available(&property, *d, today))
            .count();
        let rate = free as f64 / 2000.0;
        assert!((0.74..=0.86).contains(&rate), "observed rate {rate}");
    }

    #[test]
    fn overrides_win_over_draw() {
        let config = AvailabilityConfig {
            availability_rate: 1.0,
            ..Default::default()
        };
        let today = date(2026, 3, 1);
        let mut property = rental(1);
        property
            .details
            .availability_overrides
            .insert(date(2026, 3, 10), false);

        assert!(!config.is_available(&property, date(2026, 3, 10), today));
        assert_eq!(
            config.unavailable_nights(&property, date(2026, 3, 9), date(2026, 3, 12), today),
            vec![date(2026, 3, 10)]
        );
    }

    #[test]
    fn calendar_prices_only_available_days() {
        let config = AvailabilityConfig {
            availability_rate: 1.0,
            ..Default::default()
        };
        let today = date(2026, 3, 1);
        let mut property = rental(1);
        property
            .details
            .availability_overrides
            .insert(date(2026, 3, 2), false);

        let days = config.calendar(&property, &PricingConfig::default(), today, 3, today);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].price, Some(dec!(380000)));
        assert!(!days[1].available);
        assert_eq!(days[1].price, None);
    }

    #[test]
    fn selection_follows_click_sequence() {
        let a = date(2026, 3, 5);
        let b = date(2026, 3, 8);
        let earlier = date(2026, 3, 2);

        let selection = StaySelection::default().select(a, true);
        assert_eq!(selection, StaySelection::CheckIn(a));

        let selection = selection.select(b, true);
        assert_eq!(selection.range(), Some((a, b)));
        assert!(selection.contains(date(2026, 3, 6)));

        // A third click starts over.
        let selection = selection.select(earlier, true);
        assert_eq!(selection, StaySelection::CheckIn(earlier));
    }

    #[test]
    fn selection_restarts_on_earlier_or_same_date() {
        let a = date(2026, 3, 5);
        let selection = StaySelection::CheckIn(a);
        assert_eq!(selection.select(a, true), StaySelection::CheckIn(a));
        assert_eq!(
            selection.select(date(2026, 3, 1), true),
            StaySelection::CheckIn(date(2026, 3, 1))
        );
    }

    #[test]
    fn selection_ignores_unavailable_dates() {
        let a = date(2026, 3, 5);
        let selection = StaySelection::CheckIn(a);
        assert_eq!(selection.select(date(2026, 3, 9), false), selection);
    }
}
