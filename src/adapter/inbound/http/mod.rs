//! JSON HTTP API.
//!
//! [`router::router`] builds the axum application over any
//! [`CatalogStore`](crate::port::CatalogStore); [`server::serve`] binds it
//! and runs until Ctrl+C or SIGTERM.

pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
