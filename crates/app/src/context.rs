//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::inquiries::{
        InquiriesService, StoreInquiriesService,
        store::{InquiryStore, MemoryInquiryStore, PgInquiryStore},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub inquiries: Arc<dyn InquiriesService>,
    pub store: Arc<dyn InquiryStore>,
}

impl AppContext {
    /// Build application context backed by `PostgreSQL`.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_store(Arc::new(PgInquiryStore::new(Db::new(
            pool,
        )))))
    }

    /// Build application context backed by a process-local store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryInquiryStore::new()))
    }

    #[must_use]
    pub fn from_store(store: Arc<dyn InquiryStore>) -> Self {
        Self {
            inquiries: Arc::new(StoreInquiriesService::new(Arc::clone(&store))),
            store,
        }
    }
}
