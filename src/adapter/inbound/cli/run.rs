//! Command dispatch.
//!
//! [`run`] dispatches a parsed [`Cli`]. Every command loads the
//! configuration first, so `--config` and the environment overrides apply
//! the same way as for the server.

use std::path::Path;

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{catalog, config, serve, stay};
use crate::adapter::outbound::sqlite::database::connection::open;
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::app::{CatalogService, Config};
use crate::error::Result;

/// Run the command described by `cli`.
///
/// # Errors
/// Propagates the first error from loading the configuration, opening the
/// database or executing the command.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Seed(args) => catalog::seed(&args.config).await,
        Commands::Search(args) => catalog::search(&args).await,
        Commands::Stats(args) => catalog::stats(&args.config).await,
        Commands::Quote(args) => stay::quote(&args).await,
        Commands::Availability(args) => stay::availability(&args).await,
        Commands::Config(ConfigCommand::Validate(args)) => config::validate(&args.config),
    }
}

/// Load the configuration and start logging for a one-shot command.
///
/// Logging is quiet unless `-v` is given.
pub(super) fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    let mut logging = config.logging.clone();
    logging.level = match output::verbosity() {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
    .to_string();
    logging.init();
    Ok(config)
}

/// Open the configured database and build a service over it.
pub(super) fn open_service(config: &Config) -> Result<CatalogService<SqliteStore>> {
    let pool = open(config.database.url()?)?;
    Ok(CatalogService::new(SqliteStore::new(pool), config))
}
