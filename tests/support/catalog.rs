use std::path::PathBuf;

use chrono::NaiveDate;
use luxestate::adapter::outbound::sqlite::database::connection::{open, DbPool};
use luxestate::adapter::outbound::sqlite::store::SqliteStore;
use luxestate::app::{AppState, CatalogService, Config};
use luxestate::domain::{PropertyId, PropertyStatus};
use tempfile::TempDir;

/// A Monday, so weekday and weekend nights are easy to place.
pub fn today() -> NaiveDate {
    date(2026, 3, 2)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Catalogue database in a temporary directory, removed on drop.
pub struct TempCatalog {
    dir: TempDir,
    pub config: Config,
    pool: DbPool,
}

impl TempCatalog {
    /// Empty, migrated database. Every date inside the booking window is
    /// free.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = Config::default();
        config.database.path = dir.path().join("catalog.db");
        config.availability.availability_rate = 1.0;
        let pool = open(config.database.url().expect("utf-8 path")).expect("open database");
        Self { dir, config, pool }
    }

    /// Database holding the built-in catalogue.
    pub async fn seeded() -> Self {
        let catalog = Self::new();
        catalog.service().seed().await.expect("seed catalogue");
        catalog
    }

    pub fn path(&self) -> PathBuf {
        self.config.database.path.clone()
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }

    /// Service with "today" pinned to [`today`].
    pub fn service(&self) -> CatalogService<SqliteStore> {
        CatalogService::new(self.store(), &self.config).with_today(today())
    }

    pub fn state(&self) -> AppState<SqliteStore> {
        AppState::new(self.service(), self.config.clone())
    }

    pub async fn id_of(&self, title: &str) -> PropertyId {
        self.service()
            .list_properties(None, PropertyStatus::Available)
            .await
            .expect("list properties")
            .into_iter()
            .find(|p| p.details.title == title)
            .map(|p| p.id)
            .unwrap_or_else(|| panic!("no property titled {title}"))
    }
}
