//! Monetary types.
//!
//! Catalogue prices are stored as SQLite `REAL`; everything computed from
//! them (nightly rates, fees, quotes) is done in [`Decimal`].

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Convert a stored `REAL` amount into a [`Price`].
///
/// # Errors
/// Returns [`Error::Parse`] for NaN or infinite values.
pub fn price_from_f64(value: f64) -> Result<Price> {
    Decimal::from_f64(value).ok_or_else(|| Error::Parse(format!("invalid amount {value}")))
}

/// Convert a [`Price`] into the `REAL` representation used by the store.
#[must_use]
pub fn price_to_f64(price: Price) -> f64 {
    price.to_f64().unwrap_or_default()
}
