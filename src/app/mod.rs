//! Application layer: configuration, shared state, the catalogue service
//! and the seed catalogue.

pub mod config;
pub mod seed;
mod service;
mod state;

pub use config::{Config, DatabaseConfig, LoggingConfig, ServerConfig, DEFAULT_CONFIG_PATH};
pub use service::{CatalogService, MAX_CALENDAR_DAYS};
pub use state::AppState;
