//! Route definitions for reservations.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Reservation routes mounted at `/api/reservations`.
///
/// ```text
/// GET  /  -> list_reservations
/// POST /  -> create_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(reservations::list_reservations).post(reservations::create_reservation),
    )
}
