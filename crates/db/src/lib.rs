//! Storage layer for reservations.
//!
//! Owns the PostgreSQL connection pool lifecycle (open, check, close), the
//! idempotent schema bootstrap, and the repository issuing reservation
//! statements.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection settings for the reservation database.
///
/// When `url` is set it takes precedence over the individual fields.
#[derive(Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: "postgres".into(),
            database: "temple_reservation".into(),
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl DbConfig {
    /// Build driver connect options from either the URL or the discrete fields.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}

/// Open a connection pool, establishing at least one connection up front.
///
/// Fails if the database is unreachable, so callers can refuse to start.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    config
        .pool_options()
        .connect_with(config.connect_options()?)
        .await
}

/// Build a pool that connects on first use instead of at construction.
pub fn create_lazy_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    Ok(config.pool_options().connect_lazy_with(config.connect_options()?))
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `reservations` table if it does not exist yet.
///
/// Safe to call repeatedly; existing rows are never touched.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reservations ( \
             id BIGSERIAL PRIMARY KEY, \
             name VARCHAR(255) NOT NULL, \
             date DATE NOT NULL, \
             time TIME NOT NULL, \
             is_vip SMALLINT NOT NULL DEFAULT 0 CHECK (is_vip IN (0, 1)) \
         )",
    )
    .execute(pool)
    .await?;
    tracing::debug!("Reservations schema ensured");
    Ok(())
}

/// Whether the `reservations` table exists.
pub async fn schema_exists(pool: &DbPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT to_regclass('reservations') IS NOT NULL")
        .fetch_one(pool)
        .await
}

/// Close every pooled connection. Later queries fail with `PoolClosed`.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
