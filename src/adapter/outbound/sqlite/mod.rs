//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed catalogue store, its connection pool and
//! the Diesel schema it runs against.

pub mod database;
pub mod store;
