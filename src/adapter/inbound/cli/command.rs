//! Command-line interface definitions.
//!
//! Defines the `luxestate` command tree using `clap`: run the HTTP API,
//! seed the catalogue, and query it from the terminal.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::app::DEFAULT_CONFIG_PATH;
use crate::domain::RawSearchParams;

/// Luxury real-estate catalogue: API server and command-line tools
#[derive(Parser, Debug)]
#[command(name = "luxestate")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Insert the built-in Cartagena catalogue
    Seed(ConfigPathArg),

    /// Search available properties
    Search(SearchArgs),

    /// Price a rental stay
    Quote(QuoteArgs),

    /// Show a rental's availability calendar
    Availability(AvailabilityArgs),

    /// Show catalogue statistics
    Stats(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `luxestate config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a configuration path.
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Listen port, overriding the configuration and `PORT`.
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for `luxestate search`.
///
/// Values are passed through as strings and validated the same way as the
/// HTTP query parameters.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Free text matched against title, description, location,
    /// neighborhood and address.
    #[arg(long)]
    pub q: Option<String>,

    /// Listing type: sale or rental.
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Location or neighborhood substring.
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum number of bedrooms.
    #[arg(long)]
    pub bedrooms: Option<String>,

    /// Luxury properties only.
    #[arg(long)]
    pub luxury: bool,

    /// Oceanfront properties only.
    #[arg(long)]
    pub oceanfront: bool,
}

impl SearchArgs {
    #[must_use]
    pub fn to_params(&self) -> RawSearchParams {
        RawSearchParams {
            q: self.q.clone(),
            kind: self.kind.clone(),
            location: self.location.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            bedrooms: self.bedrooms.clone(),
            luxury: self.luxury.then(|| "true".to_string()),
            oceanfront: self.oceanfront.then(|| "true".to_string()),
        }
    }
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Property id.
    #[arg(long = "property")]
    pub property_id: i32,

    /// Check-in date (YYYY-MM-DD).
    #[arg(long)]
    pub check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD).
    #[arg(long)]
    pub check_out: NaiveDate,

    #[arg(long, default_value_t = 1)]
    pub guests: i32,
}

#[derive(Args, Debug)]
pub struct AvailabilityArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Property id.
    #[arg(long = "property")]
    pub property_id: i32,

    /// First day shown (YYYY-MM-DD), default today.
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Number of days shown, default the booking window.
    #[arg(long)]
    pub days: Option<u32>,

    /// Dates clicked in order; the first available one sets check-in and
    /// a later one sets check-out.
    #[arg(long = "select", value_name = "DATE")]
    pub selections: Vec<NaiveDate>,
}

/// Price shown in the terminal: whole amounts without decimals, anything
/// else to the cent.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let price = price.round_dp(2);
    if price.fract().is_zero() {
        format!("${}", price.trunc())
    } else {
        format!("${price:.2}")
    }
}
