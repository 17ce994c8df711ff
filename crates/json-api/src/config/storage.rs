//! Storage Config

use clap::{Args, ValueEnum};

/// Where inquiries are kept.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL`, via `DATABASE_URL`.
    Postgres,

    /// Process-local memory. Data is lost on restart.
    Memory,
}

/// Inquiry storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackend::Postgres)]
    pub storage_backend: StorageBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Apply pending migrations on startup.
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,

    /// Insert sample inquiries on startup when the store is empty.
    #[arg(long, env = "SEED_SAMPLE_DATA", default_value_t = false)]
    pub seed_sample_data: bool,
}
