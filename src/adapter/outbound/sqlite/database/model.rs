//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{bookings, inquiries, properties};

/// Database row for a property (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PropertyRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub price: Option<f64>,
    pub price_per_night: Option<f64>,
    pub location: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub sqft: f64,
    pub image_url: Option<String>,
    pub images: String,
    pub features: String,
    pub agent_name: Option<String>,
    pub agent_contact: Option<String>,
    pub is_luxury: bool,
    pub is_oceanfront: bool,
    pub is_featured: bool,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub video_url: Option<String>,
    pub virtual_tour_url: Option<String>,
    pub amenities: String,
    pub nearby_attractions: String,
    pub availability_calendar: String,
    pub min_stay: Option<i32>,
    pub max_guests: Option<i32>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub house_rules: Option<String>,
    pub cancellation_policy: Option<String>,
}

/// Database row for a property (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = properties)]
pub struct NewPropertyRow {
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub price: Option<f64>,
    pub price_per_night: Option<f64>,
    pub location: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub sqft: f64,
    pub image_url: Option<String>,
    pub images: String,
    pub features: String,
    pub agent_name: Option<String>,
    pub agent_contact: Option<String>,
    pub is_luxury: bool,
    pub is_oceanfront: bool,
    pub is_featured: bool,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub video_url: Option<String>,
    pub virtual_tour_url: Option<String>,
    pub amenities: String,
    pub nearby_attractions: String,
    pub availability_calendar: String,
    pub min_stay: Option<i32>,
    pub max_guests: Option<i32>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub house_rules: Option<String>,
    pub cancellation_policy: Option<String>,
}

/// Database row for a booking (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub id: i32,
    pub property_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests_count: i32,
    pub total_price: f64,
    pub status: String,
    pub special_requests: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for a booking (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow {
    pub property_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests_count: i32,
    pub total_price: f64,
    pub status: String,
    pub special_requests: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for an inquiry (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InquiryRow {
    pub id: i32,
    pub property_id: i32,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub message: Option<String>,
    pub inquiry_type: String,
    pub tour_date: Option<String>,
    pub tour_time: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for an inquiry (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = inquiries)]
pub struct NewInquiryRow {
    pub property_id: i32,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub message: Option<String>,
    pub inquiry_type: String,
    pub tour_date: Option<String>,
    pub tour_time: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
