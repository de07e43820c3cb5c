//! Catalogue property types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::PropertyId;
use super::money::Price;

/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Sale,
    Rental,
}

impl PropertyKind {
    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rental => "rental",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(Self::Sale),
            "rental" => Ok(Self::Rental),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Pending,
    Sold,
    Rented,
}

impl PropertyStatus {
    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
            Self::Rented => "rented",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            "rented" => Ok(Self::Rented),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

/// How a property is priced.
///
/// A sale carries a total price and a rental a nightly rate; never both.
/// Either amount may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Sale { price: Option<Price> },
    Rental { price_per_night: Option<Price> },
}

impl Listing {
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Sale { .. } => PropertyKind::Sale,
            Self::Rental { .. } => PropertyKind::Rental,
        }
    }

    /// The amount price filters compare against.
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        match *self {
            Self::Sale { price } => price,
            Self::Rental { price_per_night } => price_per_night,
        }
    }
}

/// Rental house terms. All optional; sales may still carry `max_guests`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StayTerms {
    pub min_stay: Option<i32>,
    pub max_guests: Option<i32>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub house_rules: Option<String>,
    pub cancellation_policy: Option<String>,
}

/// Descriptive and marketing content shared by stored and new properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetails {
    pub title: String,
    pub description: Option<String>,
    pub listing: Listing,
    pub location: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub sqft: f64,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub nearby_attractions: Vec<String>,
    pub agent_name: Option<String>,
    pub agent_contact: Option<String>,
    pub is_luxury: bool,
    pub is_oceanfront: bool,
    pub is_featured: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub video_url: Option<String>,
    pub virtual_tour_url: Option<String>,
    /// Manual per-date availability; wins over generated availability.
    pub availability_overrides: BTreeMap<NaiveDate, bool>,
    pub terms: StayTerms,
}

impl PropertyDetails {
    /// Minimal details for the given title, location and listing.
    pub fn new(title: impl Into<String>, location: impl Into<String>, listing: Listing) -> Self {
        Self {
            title: title.into(),
            description: None,
            listing,
            location: location.into(),
            neighborhood: None,
            address: None,
            bedrooms: 0,
            bathrooms: 0,
            sqft: 0.0,
            image_url: None,
            images: Vec::new(),
            features: Vec::new(),
            amenities: Vec::new(),
            nearby_attractions: Vec::new(),
            agent_name: None,
            agent_contact: None,
            is_luxury: false,
            is_oceanfront: false,
            is_featured: false,
            latitude: None,
            longitude: None,
            video_url: None,
            virtual_tour_url: None,
            availability_overrides: BTreeMap::new(),
            terms: StayTerms::default(),
        }
    }
}

/// A property that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub details: PropertyDetails,
    pub status: PropertyStatus,
}

impl NewProperty {
    #[must_use]
    pub fn new(details: PropertyDetails) -> Self {
        Self {
            details,
            status: PropertyStatus::default(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }

    /// Check the catalogue invariants before the row is written.
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        let d = &self.details;
        if d.title.trim().is_empty() {
            return Err(DomainError::MissingField { field: "title" });
        }
        if d.location.trim().is_empty() {
            return Err(DomainError::MissingField { field: "location" });
        }
        if let Some(price) = d.listing.price() {
            if price < Decimal::ZERO {
                let field = match d.listing.kind() {
                    PropertyKind::Sale => "price",
                    PropertyKind::Rental => "pricePerNight",
                };
                return Err(DomainError::InvalidField {
                    field,
                    reason: format!("must not be negative, got {price}"),
                });
            }
        }
        for (field, value) in [("bedrooms", d.bedrooms), ("bathrooms", d.bathrooms)] {
            if value < 0 {
                return Err(DomainError::InvalidField {
                    field,
                    reason: format!("must not be negative, got {value}"),
                });
            }
        }
        if !d.sqft.is_finite() || d.sqft < 0.0 {
            return Err(DomainError::InvalidField {
                field: "sqft",
                reason: format!("must be a non-negative number, got {}", d.sqft),
            });
        }
        for (field, value) in [
            ("minStay", d.terms.min_stay),
            ("maxGuests", d.terms.max_guests),
        ] {
            if let Some(value) = value.filter(|v| *v < 1) {
                return Err(DomainError::InvalidField {
                    field,
                    reason: format!("must be at least 1, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// A stored catalogue property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub details: PropertyDetails,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.details.listing.kind()
    }

    /// `price` for sales, `price_per_night` for rentals.
    #[must_use]
    pub const fn listing_price(&self) -> Option<Price> {
        self.details.listing.price()
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}
