//! Shared helpers for integration tests.
//!
//! These tests need a running PostgreSQL instance named by `TEST_DATABASE_URL`;
//! when it is unset every test returns early. The schema is reset by each test,
//! so database access is serialized through [`DB_LOCK`].

#![allow(dead_code)]

use clients_db::db::Database;
use tokio::sync::{Mutex, MutexGuard};

static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// A freshly reset database plus the guard that keeps other tests out.
pub struct TestDb {
    pub db: Database,
    _guard: MutexGuard<'static, ()>,
}

/// Connect to the test database and recreate the schema.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn setup() -> Option<TestDb> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping database test");
        return None;
    };

    let guard = DB_LOCK.lock().await;
    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test database");
    db.create_db().await.expect("Failed to create schema");

    Some(TestDb { db, _guard: guard })
}

pub async fn count_rows(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db.get_pool())
        .await
        .expect("Failed to count rows")
}
