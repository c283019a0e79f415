//! Handlers for creating and listing reservations.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use temple_core::reservation::validate_new_reservation;
use temple_db::repositories::ReservationRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, DataResponse, STATUS_SUCCESS};
use crate::state::AppState;

const ADD_FAILED: &str = "Error adding reservation";
const FETCH_FAILED: &str = "Error fetching reservations";

/// Request body for `POST /api/reservations`.
///
/// Fields are optional here so that missing values reach validation and
/// produce the uniform "required" message instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    /// `h:mm AM|PM`
    pub time: Option<String>,
    pub is_vip: Option<bool>,
}

/// POST /api/reservations
///
/// Sanitize, validate and store a reservation. Returns 201 with the new id.
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let reservation = validate_new_reservation(
        input.name.as_deref(),
        input.date.as_deref(),
        input.time.as_deref(),
        input.is_vip.unwrap_or(false),
    )
    .inspect_err(|e| tracing::debug!(error = %e, "Rejected reservation input"))?;

    let id = ReservationRepo::create(&state.pool, &reservation)
        .await
        .map_err(|e| AppError::storage(ADD_FAILED, e))?;

    tracing::info!(
        reservation_id = id,
        date = %reservation.date,
        time = %reservation.time,
        is_vip = reservation.is_vip,
        "Reservation added",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            status: STATUS_SUCCESS,
            message: "Reservation added successfully.",
            id,
        }),
    ))
}

/// GET /api/reservations
///
/// List every reservation in id order.
pub async fn list_reservations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reservations = ReservationRepo::list(&state.pool)
        .await
        .map_err(|e| AppError::storage(FETCH_FAILED, e))?;

    tracing::debug!(count = reservations.len(), "Reservations listed");

    Ok(Json(DataResponse::success(reservations)))
}
