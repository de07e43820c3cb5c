//! Viewing tour slots.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Tour window and daily slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    /// Days after today that tours can be scheduled.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Start times offered on every weekday, `HH:MM`.
    #[serde(default = "default_slots")]
    pub slots: Vec<String>,
}

const fn default_window_days() -> u32 {
    30
}

fn default_slots() -> Vec<String> {
    [
        "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            slots: default_slots(),
        }
    }
}

/// Parse an `HH:MM` slot time.
#[must_use]
pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Slots offered on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDay {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_times")]
    pub slots: Vec<NaiveTime>,
}

fn serialize_times<S: serde::Serializer>(times: &[NaiveTime], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(times.iter().map(|t| t.format("%H:%M").to_string()))
}

/// Weekday tour schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSchedule {
    window_days: u32,
    slots: Vec<NaiveTime>,
}

impl TourSchedule {
    /// Build from config. Unparseable slot strings are skipped; config
    /// validation reports them at load time.
    #[must_use]
    pub fn new(config: &TourConfig) -> Self {
        let mut slots: Vec<NaiveTime> = config.slots.iter().filter_map(|s| parse_slot(s)).collect();
        slots.sort_unstable();
        slots.dedup();
        Self {
            window_days: config.window_days,
            slots,
        }
    }

    /// Every weekday in `today ..= today + window` with its slots.
    #[must_use]
    pub fn days(&self, today: NaiveDate) -> Vec<TourDay> {
        let end = self.window_end(today);
        today
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| is_weekday(*d))
            .map(|date| TourDay {
                date,
                slots: self.slots.clone(),
            })
            .collect()
    }

    /// Whether a tour can start at `time` on `date`.
    #[must_use]
    pub fn is_bookable(&self, date: NaiveDate, time: NaiveTime, today: NaiveDate) -> bool {
        let end = self.window_end(today);
        date >= today && date <= end && is_weekday(date) && self.slots.contains(&time)
    }

    fn window_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
