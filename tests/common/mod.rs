#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use quicklink::infrastructure::persistence::{MIGRATOR, PoolSettings, connect};
use quicklink::routes::build_router;
use quicklink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Fresh, migrated in-memory database.
///
/// One connection kept alive for the whole test: every new connection to
/// `:memory:` would otherwise see an empty database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// Migrated database file in a temp dir, opened with the production pool
/// settings (WAL, several connections).
///
/// Keep the returned [`TempDir`] alive for the duration of the test.
pub async fn file_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("urls.db").display());

    let pool = connect(&url, PoolSettings::default()).await.unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    (pool, dir)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), Some(TEST_BASE_URL.to_string()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, 10)).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    create_test_link_at(pool, code, url, Utc::now()).await;
}

pub async fn create_test_link_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO urls (short_code, long_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .unwrap()
}
