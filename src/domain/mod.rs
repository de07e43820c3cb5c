//! Storage-free domain logic: catalogue types, search criteria, stay
//! pricing, availability and tour scheduling.

pub mod availability;
pub mod booking;
pub mod error;
pub mod id;
pub mod inquiry;
pub mod money;
pub mod pricing;
pub mod property;
pub mod search;
pub mod stats;
pub mod stay;
pub mod tour;

pub use availability::{AvailabilityConfig, CalendarDay, StaySelection};
pub use booking::{Booking, BookingDraft, BookingStatus, Contact, NewBooking};
pub use id::{BookingId, InquiryId, PropertyId};
pub use inquiry::{Inquiry, InquiryKind, InquiryStatus, NewInquiry, TourRequest};
pub use money::Price;
pub use pricing::{NightlyRate, PricingConfig, StayQuote};
pub use property::{
    Listing, NewProperty, Property, PropertyDetails, PropertyKind, PropertyStatus, StayTerms,
};
pub use search::{PriceRange, RawSearchParams, SearchCriteria};
pub use stats::CatalogStats;
pub use stay::StayRequest;
pub use tour::{TourConfig, TourDay, TourSchedule};
