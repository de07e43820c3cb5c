//! Store ports for the catalogue, bookings and inquiries.

use std::future::Future;

use crate::domain::{
    Booking, Inquiry, NewBooking, NewInquiry, NewProperty, Property, PropertyId, PropertyKind,
    PropertyStatus, SearchCriteria,
};
use crate::error::Result;

/// Catalogue reads and the internal insert path.
///
/// Every listing method returns properties in listing order: featured
/// first, then newest.
pub trait PropertyStore: Send + Sync {
    /// Store a validated property and return it with its id and timestamps.
    fn insert_property(&self, property: NewProperty)
        -> impl Future<Output = Result<Property>> + Send;

    /// Get a property by ID.
    fn get_property(&self, id: PropertyId) -> impl Future<Output = Result<Option<Property>>> + Send;

    /// Properties with `status`, optionally restricted to one kind.
    fn list_properties(
        &self,
        kind: Option<PropertyKind>,
        status: PropertyStatus,
    ) -> impl Future<Output = Result<Vec<Property>>> + Send;

    /// Available properties matching `criteria`.
    fn search_properties(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Property>>> + Send;
}

/// Rental bookings.
pub trait BookingStore: Send + Sync {
    fn insert_booking(&self, booking: NewBooking) -> impl Future<Output = Result<Booking>> + Send;

    /// Bookings for a property, newest first.
    fn bookings_for_property(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Vec<Booking>>> + Send;
}

/// Sale and viewing inquiries.
pub trait InquiryStore: Send + Sync {
    fn insert_inquiry(&self, inquiry: NewInquiry) -> impl Future<Output = Result<Inquiry>> + Send;

    /// Inquiries for a property, newest first.
    fn inquiries_for_property(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Vec<Inquiry>>> + Send;
}

/// Everything the catalogue service needs from storage.
pub trait CatalogStore: PropertyStore + BookingStore + InquiryStore {}

impl<T: PropertyStore + BookingStore + InquiryStore> CatalogStore for T {}
