use axum::extract::FromRef;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Pool<Sqlite>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
}

/// Create the SQLite connection pool from environment variables.
/// Uses `connect_lazy` so no connection opens until the first query.
///
/// `mode=rwc` in the default URL creates the database file on first use.
pub fn create_pool() -> Pool<Sqlite> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:ecourts.db?mode=rwc".to_string());

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .expect("Failed to create database pool")
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Sqlite>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}
