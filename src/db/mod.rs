mod clients;
mod phones;
mod schema;
mod search;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Database handle.
///
/// All operations run over a single connection that is reused sequentially;
/// each write opens its own transaction and commits before returning.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance from the loaded configuration
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(config.database_url()).await
    }

    /// Connect to the database at `url`
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;

        debug!("database connection established");
        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the connection, waiting for in-flight work to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Initialize the database connection
pub async fn init(config: &Config) -> Result<Database> {
    Database::new(config).await
}

/// Treat empty strings the same as absent values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
