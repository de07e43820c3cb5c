//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! a missing file yields the defaults. `PORT` and `DATABASE_PATH` in the
//! environment (or a `.env` file) override the file.
//!
//! # Example
//!
//! ```no_run
//! use luxestate::app::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::tour::parse_slot;
use crate::domain::{AvailabilityConfig, PricingConfig, TourConfig};
use crate::error::{ConfigError, Result};

mod logging;
mod server;

pub use logging::LoggingConfig;
pub use server::{DatabaseConfig, ServerConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Nightly pricing and stay fees.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Booking window and mock occupancy.
    #[serde(default)]
    pub availability: AvailabilityConfig,
    #[serde(default)]
    pub tours: TourConfig,
}

impl Config {
    /// Parse configuration from TOML, apply environment overrides and
    /// validate.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a value is invalid.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to the defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails to parse or
    /// validate.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Self::parse_toml("");
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("'{port}' is not a port number"),
            })?;
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            if !path.trim().is_empty() {
                self.database.path = PathBuf::from(path);
            }
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that required values are present and every rate, multiplier
    /// and slot is usable.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        validate_pricing(&self.pricing)?;
        validate_availability(&self.availability)?;
        validate_tours(&self.tours)?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_pricing(pricing: &PricingConfig) -> Result<()> {
    let positive = [
        ("pricing.default_nightly_rate", pricing.default_nightly_rate),
        ("pricing.weekend_multiplier", pricing.weekend_multiplier),
        ("pricing.holiday_multiplier", pricing.holiday_multiplier),
    ];
    for (field, value) in positive {
        if value <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("must be greater than 0, got {value}"),
            }
            .into());
        }
    }
    if pricing.service_fee_rate < Decimal::ZERO || pricing.service_fee_rate > Decimal::ONE {
        return Err(ConfigError::InvalidValue {
            field: "pricing.service_fee_rate",
            reason: "must be between 0 and 1".to_string(),
        }
        .into());
    }
    if pricing.cleaning_fee < Decimal::ZERO {
        return Err(ConfigError::InvalidValue {
            field: "pricing.cleaning_fee",
            reason: "must not be negative".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Longest booking or tour window, one year ahead.
const MAX_WINDOW_DAYS: u32 = 366;

fn validate_availability(availability: &AvailabilityConfig) -> Result<()> {
    if availability.window_days == 0 || availability.window_days > MAX_WINDOW_DAYS {
        return Err(ConfigError::InvalidValue {
            field: "availability.window_days",
            reason: format!("must be between 1 and {MAX_WINDOW_DAYS}"),
        }
        .into());
    }
    if !(0.0..=1.0).contains(&availability.availability_rate) {
        return Err(ConfigError::InvalidValue {
            field: "availability.availability_rate",
            reason: "must be between 0 and 1".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_tours(tours: &TourConfig) -> Result<()> {
    if tours.window_days > MAX_WINDOW_DAYS {
        return Err(ConfigError::InvalidValue {
            field: "tours.window_days",
            reason: format!("must be at most {MAX_WINDOW_DAYS}"),
        }
        .into());
    }
    if tours.slots.is_empty() {
        return Err(ConfigError::MissingField {
            field: "tours.slots",
        }
        .into());
    }
    if let Some(bad) = tours.slots.iter().find(|s| parse_slot(s).is_none()) {
        return Err(ConfigError::InvalidValue {
            field: "tours.slots",
            reason: format!("'{bad}' is not an HH:MM time"),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        // Leave the process environment out of unit tests.
        config.validate()?;
        Ok(config)
    }

    fn invalid_field(result: Result<Config>) -> &'static str {
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. }))
            | Err(Error::Config(ConfigError::MissingField { field })) => field,
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.pricing.cleaning_fee, dec!(50));
        assert_eq!(config.availability.window_days, 90);
        assert_eq!(config.tours.slots.len(), 8);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
            [server]
            port = 8080
            cors_origins = ["https://luxestate.co"]

            [database]
            path = "/tmp/catalog.db"

            [pricing]
            cleaning_fee = 80
            service_fee_rate = 0.12

            [tours]
            slots = ["10:00", "15:30"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.cors_origins, vec!["https://luxestate.co"]);
        assert_eq!(config.database.path, PathBuf::from("/tmp/catalog.db"));
        assert_eq!(config.pricing.cleaning_fee, dec!(80));
        assert_eq!(config.pricing.service_fee_rate, dec!(0.12));
        assert_eq!(config.pricing.weekend_multiplier, dec!(1.3));
        assert_eq!(config.tours.window_days, 30);
    }

    #[test]
    fn rejects_out_of_range_values() {
        for (content, field) in [
            ("[server]\nport = 0", "server.port"),
            ("[logging]\nformat = \"xml\"", "logging.format"),
            ("[pricing]\nweekend_multiplier = 0", "pricing.weekend_multiplier"),
            ("[pricing]\nservice_fee_rate = 1.5", "pricing.service_fee_rate"),
            ("[pricing]\ncleaning_fee = -1", "pricing.cleaning_fee"),
            ("[availability]\navailability_rate = 1.2", "availability.availability_rate"),
            ("[availability]\nwindow_days = 0", "availability.window_days"),
            ("[availability]\nwindow_days = 4000000000", "availability.window_days"),
            ("[tours]\nwindow_days = 367", "tours.window_days"),
            ("[tours]\nslots = [\"9am\"]", "tours.slots"),
            ("[tours]\nslots = []", "tours.slots"),
        ] {
            assert_eq!(invalid_field(parse(content)), field, "config: {content}");
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse("[server\nport = 1").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let server = ServerConfig::default();
        assert_eq!(server.bind_addr().unwrap().to_string(), "127.0.0.1:5001");
    }
}
