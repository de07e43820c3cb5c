//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http::server;
use crate::adapter::outbound::sqlite::database::connection::open;
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::app::{AppState, Config};
use crate::error::Result;

/// Open the database and run the HTTP API until shutdown.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load(&args.config.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
        config.validate()?;
    }
    config.init_logging();

    let addr = config.server.bind_addr()?;
    let database = config.database.url()?.to_string();
    info!(version = env!("CARGO_PKG_VERSION"), %addr, %database, "luxestate starting");

    let pool = open(&database)?;
    let state = AppState::from_store(SqliteStore::new(pool), config);
    server::serve(state, addr).await?;

    info!("luxestate stopped");
    Ok(())
}
