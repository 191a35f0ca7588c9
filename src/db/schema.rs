use tracing::info;

use super::Database;
use crate::error::Result;

const DROP_TABLES: [&str; 2] = [
    // phones references clients, so it goes first
    "DROP TABLE IF EXISTS phones",
    "DROP TABLE IF EXISTS clients",
];

const CREATE_CLIENTS: &str = r#"
    CREATE TABLE clients (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(50),
        last_name VARCHAR(50),
        email VARCHAR(100) UNIQUE
    )
"#;

const CREATE_PHONES: &str = r#"
    CREATE TABLE phones (
        id SERIAL PRIMARY KEY,
        client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
        phone VARCHAR(20) NOT NULL
    )
"#;

impl Database {
    /// Drop and recreate the `clients` and `phones` tables.
    ///
    /// Destroys all existing data. Safe to call repeatedly.
    pub async fn create_db(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for statement in DROP_TABLES {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        let mut tx = self.pool.begin().await?;
        sqlx::query(CREATE_CLIENTS).execute(&mut *tx).await?;
        sqlx::query(CREATE_PHONES).execute(&mut *tx).await?;
        tx.commit().await?;

        info!("database schema created");
        Ok(())
    }
}
