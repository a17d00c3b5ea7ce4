use axum::extract::FromRef;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::store::TodoStore;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<TodoStore>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

/// Create a Postgres pool. Uses `connect_lazy` so no connections open
/// until the first query.
pub fn create_pool(database_url: &str) -> Result<Pool<Postgres>, sqlx::Error> {
    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Error raised while bringing up the store at startup.
#[derive(Debug)]
pub enum StoreInitError {
    Connect(sqlx::Error),
    Migrate(MigrateError),
}

impl std::fmt::Display for StoreInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreInitError::Connect(e) => write!(f, "failed to create database pool: {e}"),
            StoreInitError::Migrate(e) => write!(f, "failed to run database migrations: {e}"),
        }
    }
}

impl std::error::Error for StoreInitError {}

/// Pick the backend from the environment.
///
/// With `DATABASE_URL` set, connects to Postgres and applies migrations.
/// Without it, falls back to the in-memory store, which loses everything
/// on restart.
pub async fn store_from_env() -> Result<TodoStore, StoreInitError> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            let pool = create_pool(&url).map_err(StoreInitError::Connect)?;
            run_migrations(&pool).await.map_err(StoreInitError::Migrate)?;
            tracing::info!("Connected to Postgres store");
            Ok(TodoStore::Postgres(pool))
        }
        _ => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on restart)");
            Ok(TodoStore::memory())
        }
    }
}
