//! Request and response bodies.
//!
//! Field names are camelCase on the wire. Request fields are all optional
//! so that a missing value is reported as a named field error rather than
//! a generic deserialisation failure.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::tour::parse_slot;
use crate::domain::{
    Booking, BookingDraft, BookingStatus, Contact, Inquiry, InquiryKind, InquiryStatus, Listing,
    NewInquiry, Price, Property, PropertyKind, PropertyStatus, RawSearchParams, StayRequest,
    TourRequest,
};

/// Success envelope: `{ "success": true, "data": ..., "count": n }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}

/// Search results echo the query they answer.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<PropertyResponse>,
    pub count: usize,
    pub query: RawSearchParams,
}

/// Title and location of the property a booking or inquiry is for.
#[derive(Debug, Serialize)]
pub struct PropertySummary {
    pub title: String,
    pub location: String,
}

impl From<&Property> for PropertySummary {
    fn from(property: &Property) -> Self {
        Self {
            title: property.details.title.clone(),
            location: property.details.location.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub booking_id: i32,
    pub data: BookingResponse,
    pub property: PropertySummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub inquiry_id: i32,
    pub data: InquiryResponse,
    pub property: PropertySummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub price_per_night: Option<Price>,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
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
    pub availability_calendar: BTreeMap<NaiveDate, bool>,
    pub min_stay: Option<i32>,
    pub max_guests: Option<i32>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub house_rules: Option<String>,
    pub cancellation_policy: Option<String>,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        let kind = property.kind();
        let d = property.details;
        let (price, price_per_night) = match d.listing {
            Listing::Sale { price } => (price, None),
            Listing::Rental { price_per_night } => (None, price_per_night),
        };
        Self {
            id: property.id.get(),
            title: d.title,
            description: d.description,
            price,
            price_per_night,
            kind,
            location: d.location,
            neighborhood: d.neighborhood,
            address: d.address,
            bedrooms: d.bedrooms,
            bathrooms: d.bathrooms,
            sqft: d.sqft,
            image_url: d.image_url,
            images: d.images,
            features: d.features,
            amenities: d.amenities,
            nearby_attractions: d.nearby_attractions,
            agent_name: d.agent_name,
            agent_contact: d.agent_contact,
            is_luxury: d.is_luxury,
            is_oceanfront: d.is_oceanfront,
            is_featured: d.is_featured,
            latitude: d.latitude,
            longitude: d.longitude,
            video_url: d.video_url,
            virtual_tour_url: d.virtual_tour_url,
            availability_calendar: d.availability_overrides,
            min_stay: d.terms.min_stay,
            max_guests: d.terms.max_guests,
            check_in_time: d.terms.check_in_time,
            check_out_time: d.terms.check_out_time,
            house_rules: d.terms.house_rules,
            cancellation_policy: d.terms.cancellation_policy,
            status: property.status,
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i32,
    pub property_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests_count: i32,
    pub total_price: Price,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.get(),
            property_id: booking.property_id.get(),
            guest_name: booking.guest.name,
            guest_email: booking.guest.email,
            guest_phone: booking.guest.phone,
            check_in_date: booking.stay.check_in,
            check_out_date: booking.stay.check_out,
            guests_count: booking.stay.guests,
            total_price: booking.total_price,
            special_requests: booking.special_requests,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: i32,
    pub property_id: i32,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub message: Option<String>,
    pub inquiry_type: InquiryKind,
    pub tour_date: Option<NaiveDate>,
    pub tour_time: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id.get(),
            property_id: inquiry.property_id.get(),
            client_name: inquiry.client.name,
            client_email: inquiry.client.email,
            client_phone: inquiry.client.phone,
            message: inquiry.message,
            inquiry_type: inquiry.kind,
            tour_date: inquiry.tour.map(|t| t.date),
            tour_time: inquiry.tour.map(|t| t.time.format("%H:%M").to_string()),
            status: inquiry.status,
            created_at: inquiry.created_at,
        }
    }
}

/// `GET /api/properties` filters.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    /// Parse the filters; `type=all` means any kind and status defaults to
    /// available.
    ///
    /// # Errors
    /// [`DomainError::UnknownKind`] or [`DomainError::UnknownStatus`].
    pub fn parse(&self) -> Result<(Option<PropertyKind>, PropertyStatus), DomainError> {
        let kind = non_blank(self.kind.as_deref())
            .filter(|kind| !kind.eq_ignore_ascii_case("all"))
            .map(str::parse)
            .transpose()?;
        let status = non_blank(self.status.as_deref())
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        Ok((kind, status))
    }
}

/// `GET /api/properties/{id}/availability` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityParams {
    pub from: Option<String>,
    pub days: Option<String>,
}

impl AvailabilityParams {
    /// # Errors
    /// [`DomainError::InvalidField`] for an unparseable date or day count.
    pub fn parse(&self) -> Result<(Option<NaiveDate>, Option<u32>), DomainError> {
        let from = non_blank(self.from.as_deref())
            .map(|v| parse_date("from", v))
            .transpose()?;
        let days = non_blank(self.days.as_deref())
            .map(|v| {
                v.parse::<u32>().map_err(|_| DomainError::InvalidField {
                    field: "days",
                    reason: format!("'{v}' is not a whole number of days"),
                })
            })
            .transpose()?;
        Ok((from, days))
    }
}

/// `GET /api/properties/{id}/quote` parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
}

impl QuoteParams {
    /// Guests default to one.
    ///
    /// # Errors
    /// The first missing or malformed parameter.
    pub fn parse(&self) -> Result<StayRequest, DomainError> {
        let check_in = parse_date("checkIn", required("checkIn", self.check_in.as_deref())?)?;
        let check_out = parse_date("checkOut", required("checkOut", self.check_out.as_deref())?)?;
        let guests = non_blank(self.guests.as_deref())
            .map(|v| parse_count("guests", v))
            .transpose()?
            .unwrap_or(1);
        Ok(StayRequest {
            check_in,
            check_out,
            guests,
        })
    }
}

/// `POST /api/bookings` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub property_id: Option<i32>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub guests_count: Option<i32>,
    pub total_price: Option<Price>,
    pub special_requests: Option<String>,
}

impl CreateBookingRequest {
    /// # Errors
    /// [`DomainError::MissingField`] for the first absent required field,
    /// [`DomainError::InvalidField`] for a malformed date.
    pub fn into_draft(self) -> Result<BookingDraft, DomainError> {
        let property_id = self
            .property_id
            .ok_or(DomainError::MissingField { field: "propertyId" })?;
        let name = required("guestName", self.guest_name.as_deref())?.to_string();
        let email = required("guestEmail", self.guest_email.as_deref())?.to_string();
        let check_in = parse_date(
            "checkInDate",
            required("checkInDate", self.check_in_date.as_deref())?,
        )?;
        let check_out = parse_date(
            "checkOutDate",
            required("checkOutDate", self.check_out_date.as_deref())?,
        )?;
        let guests = self
            .guests_count
            .ok_or(DomainError::MissingField { field: "guestsCount" })?;

        Ok(BookingDraft {
            property_id: property_id.into(),
            guest: Contact {
                name,
                email,
                phone: optional(self.guest_phone),
            },
            stay: StayRequest {
                check_in,
                check_out,
                guests,
            },
            total_price: self.total_price,
            special_requests: optional(self.special_requests),
        })
    }
}

/// `POST /api/inquiries` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub property_id: Option<i32>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub message: Option<String>,
    pub inquiry_type: Option<String>,
    pub tour_date: Option<String>,
    pub tour_time: Option<String>,
}

impl CreateInquiryRequest {
    /// Inquiry type defaults to general. A tour needs both date and time.
    ///
    /// # Errors
    /// The first missing or malformed field.
    pub fn into_new_inquiry(self) -> Result<NewInquiry, DomainError> {
        let property_id = self
            .property_id
            .ok_or(DomainError::MissingField { field: "propertyId" })?;
        let name = required("clientName", self.client_name.as_deref())?.to_string();
        let email = required("clientEmail", self.client_email.as_deref())?.to_string();
        let kind = non_blank(self.inquiry_type.as_deref())
            .map(str::parse::<InquiryKind>)
            .transpose()?
            .unwrap_or_default();

        let tour = match (
            non_blank(self.tour_date.as_deref()),
            non_blank(self.tour_time.as_deref()),
        ) {
            (None, None) => None,
            (Some(_), None) => return Err(DomainError::MissingField { field: "tourTime" }),
            (None, Some(_)) => return Err(DomainError::MissingField { field: "tourDate" }),
            (Some(date), Some(time)) => Some(TourRequest {
                date: parse_date("tourDate", date)?,
                time: parse_slot(time).ok_or_else(|| DomainError::InvalidField {
                    field: "tourTime",
                    reason: format!("'{time}' is not an HH:MM time"),
                })?,
            }),
        };

        Ok(NewInquiry {
            property_id: property_id.into(),
            client: Contact {
                name,
                email,
                phone: optional(self.client_phone),
            },
            message: optional(self.message),
            kind,
            tour,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, DomainError> {
    non_blank(value).ok_or(DomainError::MissingField { field })
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| DomainError::InvalidField {
            field,
            reason: format!("'{value}' is not a date (expected YYYY-MM-DD)"),
        })
}

fn parse_count(field: &'static str, value: &str) -> Result<i32, DomainError> {
    value.parse().map_err(|_| DomainError::InvalidField {
        field,
        reason: format!("'{value}' is not a whole number"),
    })
}
