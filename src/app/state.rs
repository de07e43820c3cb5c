//! Shared application state.

use std::sync::Arc;

use crate::app::config::Config;
use crate::app::service::CatalogService;
use crate::port::CatalogStore;

/// State handed to every request handler.
///
/// Cheap to clone; the service and config are shared behind `Arc`s.
pub struct AppState<S> {
    service: Arc<CatalogService<S>>,
    config: Arc<Config>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: CatalogStore> AppState<S> {
    #[must_use]
    pub fn new(service: CatalogService<S>, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Build the service from `store` and `config` in one step.
    #[must_use]
    pub fn from_store(store: S, config: Config) -> Self {
        let service = CatalogService::new(store, &config);
        Self::new(service, config)
    }

    pub fn service(&self) -> &CatalogService<S> {
        &self.service
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open;
    use crate::adapter::outbound::sqlite::store::SqliteStore;

    #[test]
    fn clones_share_the_service() {
        let store = SqliteStore::new(open(":memory:").unwrap());
        let state = AppState::from_store(store, Config::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.service(), clone.service()));
        assert_eq!(clone.config().server.port, 5001);
    }
}
