pub mod health;
pub mod reservations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reservations                                    list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reservations", reservations::router())
}
