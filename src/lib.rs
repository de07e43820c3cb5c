//! Luxestate - luxury real-estate catalogue backend.
//!
//! Lists, searches and describes Cartagena properties for sale and for rent,
//! prices rental stays night by night, and records booking requests and
//! sale or viewing inquiries.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Storage-free types and rules
//!   - `SearchCriteria` - validated search filters, featured-first ordering
//!   - `PricingConfig` - weekend/holiday multipliers, service and cleaning fees
//!   - `AvailabilityConfig` - booking window and deterministic mock occupancy
//!   - `TourSchedule` - weekday viewing slots
//!
//! - **`port`** - Async storage traits
//! - **`adapter`** - SQLite store (Diesel), axum HTTP API, clap CLI
//! - **`app`** - Configuration, logging, `CatalogService`, seed catalogue
//!
//! # Modules
//!
//! - [`domain`] - Properties, search, pricing, availability, bookings, inquiries
//! - [`port`] - `PropertyStore`, `BookingStore`, `InquiryStore`
//! - [`adapter`] - Inbound (HTTP, CLI) and outbound (SQLite) adapters
//! - [`app`] - Application layer
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use luxestate::adapter::outbound::sqlite::database::connection::open;
//! use luxestate::adapter::outbound::sqlite::store::SqliteStore;
//! use luxestate::app::{CatalogService, Config};
//! use luxestate::domain::RawSearchParams;
//!
//! # async fn demo() -> luxestate::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let store = SqliteStore::new(open(config.database.url()?)?);
//! let service = CatalogService::new(store, &config);
//!
//! let params = RawSearchParams {
//!     q: Some("Bocagrande".into()),
//!     ..Default::default()
//! };
//! for property in service.search(&params).await? {
//!     println!("{} {}", property.id, property.details.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod port;
