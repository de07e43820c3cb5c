//! SQLite catalogue store implementation.
//!
//! Persists properties, bookings and inquiries with Diesel. Search criteria
//! are compiled into a single boxed query so column filters and ordering
//! happen in SQLite. Text filters run on the loaded rows because SQLite
//! folds case for ASCII only.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::Sqlite;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    BookingRow, InquiryRow, NewBookingRow, NewInquiryRow, NewPropertyRow, PropertyRow,
};
use crate::adapter::outbound::sqlite::database::schema::{bookings, inquiries, properties};
use crate::domain::money::{price_from_f64, price_to_f64};
use crate::domain::{
    Booking, BookingId, BookingStatus, Contact, Inquiry, InquiryId, InquiryKind, InquiryStatus,
    Listing, NewBooking, NewInquiry, NewProperty, Property, PropertyDetails, PropertyId,
    PropertyKind, PropertyStatus, SearchCriteria, StayRequest, StayTerms, TourRequest,
};
use crate::error::{Error, Result};
use crate::port::{BookingStore, InquiryStore, PropertyStore};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

type PropertyQuery<'a> =
    properties::BoxedQuery<'a, Sqlite, diesel::dsl::AsSelect<PropertyRow, Sqlite>>;

/// SQLite-backed catalogue store.
///
/// Implements [`PropertyStore`], [`BookingStore`] and [`InquiryStore`]
/// over one connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn properties_query<'a>() -> PropertyQuery<'a> {
        properties::table
            .select(PropertyRow::as_select())
            .order((
                properties::is_featured.desc(),
                properties::created_at.desc(),
                properties::id.desc(),
            ))
            .into_boxed()
    }

    fn load_properties(&self, query: PropertyQuery<'_>) -> Result<Vec<Property>> {
        let mut conn = self.conn()?;
        let rows: Vec<PropertyRow> = query
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.into_iter().map(property_from_row).collect()
    }
}

impl PropertyStore for SqliteStore {
    async fn insert_property(&self, property: NewProperty) -> Result<Property> {
        property.validate()?;
        let row = property_to_row(&property, Utc::now())?;
        let mut conn = self.conn()?;

        let stored: PropertyRow = diesel::insert_into(properties::table)
            .values(&row)
            .returning(PropertyRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        property_from_row(stored)
    }

    async fn get_property(&self, id: PropertyId) -> Result<Option<Property>> {
        let mut conn = self.conn()?;

        let row: Option<PropertyRow> = properties::table
            .find(id.get())
            .select(PropertyRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(property_from_row).transpose()
    }

    async fn list_properties(
        &self,
        kind: Option<PropertyKind>,
        status: PropertyStatus,
    ) -> Result<Vec<Property>> {
        let mut query = Self::properties_query().filter(properties::status.eq(status.as_str()));
        if let Some(kind) = kind {
            query = query.filter(properties::kind.eq(kind.as_str()));
        }
        self.load_properties(query)
    }

    async fn search_properties(&self, criteria: &SearchCriteria) -> Result<Vec<Property>> {
        let mut query = Self::properties_query()
            .filter(properties::status.eq(PropertyStatus::Available.as_str()));

        if let Some(kind) = criteria.kind {
            query = query.filter(properties::kind.eq(kind.as_str()));
        }
        // Sales compare `price`, rentals `price_per_night`; NULL never matches.
        if let Some(min) = criteria.price.min.map(price_to_f64) {
            query = query.filter(
                properties::kind
                    .eq(PropertyKind::Sale.as_str())
                    .and(properties::price.ge(min))
                    .or(properties::kind
                        .eq(PropertyKind::Rental.as_str())
                        .and(properties::price_per_night.ge(min))),
            );
        }
        if let Some(max) = criteria.price.max.map(price_to_f64) {
            query = query.filter(
                properties::kind
                    .eq(PropertyKind::Sale.as_str())
                    .and(properties::price.le(max))
                    .or(properties::kind
                        .eq(PropertyKind::Rental.as_str())
                        .and(properties::price_per_night.le(max))),
            );
        }
        if let Some(bedrooms) = criteria.min_bedrooms {
            query = query.filter(properties::bedrooms.ge(bedrooms));
        }
        if criteria.luxury_only {
            query = query.filter(properties::is_luxury.eq(true));
        }
        if criteria.oceanfront_only {
            query = query.filter(properties::is_oceanfront.eq(true));
        }

        let mut found = self.load_properties(query)?;
        found.retain(|p| criteria.matches_text(p));
        Ok(found)
    }
}

impl BookingStore for SqliteStore {
    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking> {
        let now = timestamp(Utc::now());
        let row = NewBookingRow {
            property_id: booking.property_id.get(),
            guest_name: booking.guest.name,
            guest_email: booking.guest.email,
            guest_phone: booking.guest.phone,
            check_in_date: booking.stay.check_in.format(DATE_FORMAT).to_string(),
            check_out_date: booking.stay.check_out.format(DATE_FORMAT).to_string(),
            guests_count: booking.stay.guests,
            total_price: price_to_f64(booking.total_price),
            status: BookingStatus::default().as_str().to_string(),
            special_requests: booking.special_requests,
            created_at: now.clone(),
            updated_at: now,
        };
        let mut conn = self.conn()?;

        let stored: BookingRow = diesel::insert_into(bookings::table)
            .values(&row)
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        booking_from_row(stored)
    }

    async fn bookings_for_property(&self, id: PropertyId) -> Result<Vec<Booking>> {
        let mut conn = self.conn()?;

        let rows: Vec<BookingRow> = bookings::table
            .filter(bookings::property_id.eq(id.get()))
            .order((bookings::created_at.desc(), bookings::id.desc()))
            .select(BookingRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(booking_from_row).collect()
    }
}

impl InquiryStore for SqliteStore {
    async fn insert_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        let now = timestamp(Utc::now());
        let row = NewInquiryRow {
            property_id: inquiry.property_id.get(),
            client_name: inquiry.client.name,
            client_email: inquiry.client.email,
            client_phone: inquiry.client.phone,
            message: inquiry.message,
            inquiry_type: inquiry.kind.as_str().to_string(),
            tour_date: inquiry
                .tour
                .map(|t| t.date.format(DATE_FORMAT).to_string()),
            tour_time: inquiry
                .tour
                .map(|t| t.time.format(TIME_FORMAT).to_string()),
            status: InquiryStatus::default().as_str().to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        let mut conn = self.conn()?;

        let stored: InquiryRow = diesel::insert_into(inquiries::table)
            .values(&row)
            .returning(InquiryRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        inquiry_from_row(stored)
    }

    async fn inquiries_for_property(&self, id: PropertyId) -> Result<Vec<Inquiry>> {
        let mut conn = self.conn()?;

        let rows: Vec<InquiryRow> = inquiries::table
            .filter(inquiries::property_id.eq(id.get()))
            .order((inquiries::created_at.desc(), inquiries::id.desc()))
            .select(InquiryRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(inquiry_from_row).collect()
    }
}

/// Fixed-width RFC 3339 so that text order is time order.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("timestamp '{value}': {e}")))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| Error::Parse(format!("date '{value}': {e}")))
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| Error::Parse(format!("time '{value}': {e}")))
}

fn encode_list(values: &[String]) -> Result<String> {
    serde_json::to_string(values).map_err(|e| Error::Parse(e.to_string()))
}

fn decode_list(column: &str, value: &str) -> Result<Vec<String>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(value).map_err(|e| Error::Parse(format!("{column}: {e}")))
}

fn decode_overrides(value: &str) -> Result<BTreeMap<NaiveDate, bool>> {
    if value.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(value)
        .map_err(|e| Error::Parse(format!("availability_calendar: {e}")))
}

fn optional_price(value: Option<f64>) -> Result<Option<crate::domain::Price>> {
    value.map(price_from_f64).transpose()
}

fn property_to_row(property: &NewProperty, now: DateTime<Utc>) -> Result<NewPropertyRow> {
    let d = &property.details;
    let (price, price_per_night) = match d.listing {
        Listing::Sale { price } => (price.map(price_to_f64), None),
        Listing::Rental { price_per_night } => (None, price_per_night.map(price_to_f64)),
    };
    let now = timestamp(now);

    Ok(NewPropertyRow {
        title: d.title.clone(),
        description: d.description.clone(),
        kind: d.listing.kind().as_str().to_string(),
        price,
        price_per_night,
        location: d.location.clone(),
        neighborhood: d.neighborhood.clone(),
        address: d.address.clone(),
        bedrooms: d.bedrooms,
        bathrooms: d.bathrooms,
        sqft: d.sqft,
        image_url: d.image_url.clone(),
        images: encode_list(&d.images)?,
        features: encode_list(&d.features)?,
        agent_name: d.agent_name.clone(),
        agent_contact: d.agent_contact.clone(),
        is_luxury: d.is_luxury,
        is_oceanfront: d.is_oceanfront,
        is_featured: d.is_featured,
        status: property.status.as_str().to_string(),
        created_at: now.clone(),
        updated_at: now,
        latitude: d.latitude,
        longitude: d.longitude,
        video_url: d.video_url.clone(),
        virtual_tour_url: d.virtual_tour_url.clone(),
        amenities: encode_list(&d.amenities)?,
        nearby_attractions: encode_list(&d.nearby_attractions)?,
        availability_calendar: serde_json::to_string(&d.availability_overrides)
            .map_err(|e| Error::Parse(e.to_string()))?,
        min_stay: d.terms.min_stay,
        max_guests: d.terms.max_guests,
        check_in_time: d.terms.check_in_time.clone(),
        check_out_time: d.terms.check_out_time.clone(),
        house_rules: d.terms.house_rules.clone(),
        cancellation_policy: d.terms.cancellation_policy.clone(),
    })
}

fn property_from_row(row: PropertyRow) -> Result<Property> {
    let listing = match row.kind.parse::<PropertyKind>()? {
        PropertyKind::Sale => Listing::Sale {
            price: optional_price(row.price)?,
        },
        PropertyKind::Rental => Listing::Rental {
            price_per_night: optional_price(row.price_per_night)?,
        },
    };

    let details = PropertyDetails {
        title: row.title,
        description: row.description,
        listing,
        location: row.location,
        neighborhood: row.neighborhood,
        address: row.address,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        sqft: row.sqft,
        image_url: row.image_url,
        images: decode_list("images", &row.images)?,
        features: decode_list("features", &row.features)?,
        amenities: decode_list("amenities", &row.amenities)?,
        nearby_attractions: decode_list("nearby_attractions", &row.nearby_attractions)?,
        agent_name: row.agent_name,
        agent_contact: row.agent_contact,
        is_luxury: row.is_luxury,
        is_oceanfront: row.is_oceanfront,
        is_featured: row.is_featured,
        latitude: row.latitude,
        longitude: row.longitude,
        video_url: row.video_url,
        virtual_tour_url: row.virtual_tour_url,
        availability_overrides: decode_overrides(&row.availability_calendar)?,
        terms: StayTerms {
            min_stay: row.min_stay,
            max_guests: row.max_guests,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            house_rules: row.house_rules,
            cancellation_policy: row.cancellation_policy,
        },
    };

    Ok(Property {
        id: PropertyId::new(row.id),
        details,
        status: row.status.parse()?,
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}

fn booking_from_row(row: BookingRow) -> Result<Booking> {
    Ok(Booking {
        id: BookingId::new(row.id),
        property_id: PropertyId::new(row.property_id),
        guest: Contact {
            name: row.guest_name,
            email: row.guest_email,
            phone: row.guest_phone,
        },
        stay: StayRequest {
            check_in: parse_date(&row.check_in_date)?,
            check_out: parse_date(&row.check_out_date)?,
            guests: row.guests_count,
        },
        total_price: price_from_f64(row.total_price)?,
        special_requests: row.special_requests,
        status: row.status.parse()?,
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}

fn inquiry_from_row(row: InquiryRow) -> Result<Inquiry> {
    let tour = match (row.tour_date.as_deref(), row.tour_time.as_deref()) {
        (Some(date), Some(time)) => Some(TourRequest {
            date: parse_date(date)?,
            time: parse_time(time)?,
        }),
        _ => None,
    };

    Ok(Inquiry {
        id: InquiryId::new(row.id),
        property_id: PropertyId::new(row.property_id),
        client: Contact {
            name: row.client_name,
            email: row.client_email,
            phone: row.client_phone,
        },
        message: row.message,
        kind: row.inquiry_type.parse::<InquiryKind>()?,
        tour,
        status: row.status.parse()?,
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}
