//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        HTTP / CLI adapters
//!               │
//!               ▼
//!     ┌───────────────────────┐
//!     │ CatalogService (app)  │
//!     └──────────┬────────────┘
//!                │ PropertyStore / BookingStore / InquiryStore
//!                ▼
//!        ┌───────────────┐
//!        │ SQLite adapter│
//!        └───────────────┘
//! ```

mod store;

pub use store::{BookingStore, CatalogStore, InquiryStore, PropertyStore};
