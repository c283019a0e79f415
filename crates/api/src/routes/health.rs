//! Liveness and readiness report at `/health`.
//!
//! The service is only useful once the reservations table is reachable, so
//! readiness is a single query asking whether that table exists.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when storage is reachable and the schema is in place, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    pub schema_ready: bool,
}

impl DatabaseHealth {
    async fn check(pool: &temple_db::DbPool) -> Self {
        match temple_db::schema_exists(pool).await {
            Ok(schema_ready) => Self {
                reachable: true,
                schema_ready,
            },
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not reach database");
                Self {
                    reachable: false,
                    schema_ready: false,
                }
            }
        }
    }
}

/// GET /health
///
/// 200 when ready, 503 otherwise; the body is the same report either way.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = DatabaseHealth::check(&state.pool).await;
    let ready = database.reachable && database.schema_ready;

    let report = HealthReport {
        status: if ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    };
    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(report))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
