//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::app::Config;
use crate::error::Result;

/// Execute `config validate`.
///
/// A missing file is valid: the defaults apply.
pub fn validate(path: &Path) -> Result<()> {
    let exists = path.exists();
    let config = Config::load(path)?;

    if output::is_json() {
        output::record(
            "config",
            &json!({
                "path": path.display().to_string(),
                "exists": exists,
                "valid": true,
                "listen": format!("{}:{}", config.server.host, config.server.port),
                "database": config.database.path.display().to_string(),
            }),
        );
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Configuration");
    output::field("Path", path.display());
    if !exists {
        output::warning("File not found, using defaults");
    }
    output::field(
        "Listen",
        format!("{}:{}", config.server.host, config.server.port),
    );
    output::field("Database", config.database.path.display());
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );
    output::field("CORS origins", config.server.cors_origins.join(", "));
    output::field(
        "Booking window",
        format!("{} days", config.availability.window_days),
    );
    output::field("Tour slots", config.tours.slots.join(" "));
    output::success("Configuration is valid");
    Ok(())
}
