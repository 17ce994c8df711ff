//! Application context bootstrap for the configured storage backend.

use thiserror::Error;
use tracing::info;

use tradeverify_app::{
    context::{AppContext, AppInitError},
    domain::inquiries::{errors::InquiryStoreError, samples::seed_sample_inquiries},
};

use crate::config::storage::{StorageBackend, StorageConfig};

/// Errors raised while preparing inquiry storage.
#[derive(Debug, Error)]
pub(crate) enum StorageInitError {
    /// The postgres backend was selected without a connection string.
    #[error("DATABASE_URL is required for the postgres storage backend")]
    MissingDatabaseUrl,

    /// Connecting or migrating failed.
    #[error(transparent)]
    App(#[from] AppInitError),

    /// Sample data could not be written.
    #[error("failed to seed sample inquiries: {0}")]
    Seed(#[source] InquiryStoreError),
}

/// Build the application context and optionally seed sample data.
pub(crate) async fn init(config: &StorageConfig) -> Result<AppContext, StorageInitError> {
    let app = match config.storage_backend {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(StorageInitError::MissingDatabaseUrl)?;

            AppContext::from_database_url(url, config.run_migrations).await?
        }
        StorageBackend::Memory => {
            info!("using in-memory inquiry storage");

            AppContext::in_memory()
        }
    };

    if config.seed_sample_data {
        seed_sample_inquiries(app.store.as_ref())
            .await
            .map_err(StorageInitError::Seed)?;
    }

    Ok(app)
}
