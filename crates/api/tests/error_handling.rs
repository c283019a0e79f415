//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests do NOT need an HTTP server -- they call `IntoResponse`
//! directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use http_body_util::BodyExt;
use temple_api::error::{AppError, TIMEOUT_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use temple_api::router::{handle_panic, timeout_envelope};
use temple_core::error::CoreError;

async fn into_parts(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    into_parts(err.into_response()).await
}

// ---------------------------------------------------------------------------
// Client input errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation(
        "Name, date, and time are required.".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Name, date, and time are required.");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "bad body");
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_error_returns_500_with_driver_detail() {
    let err = AppError::storage("Error adding reservation", sqlx::Error::PoolClosed);
    let detail = sqlx::Error::PoolClosed.to_string();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["message"],
        format!("Error adding reservation: {detail}")
    );
}

#[tokio::test]
async fn storage_error_display_includes_context() {
    let err = AppError::storage("Error fetching reservations", sqlx::Error::PoolTimedOut);
    assert!(err.to_string().starts_with("Error fetching reservations: "));
}

// ---------------------------------------------------------------------------
// Unhandled errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_hides_detail() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["message"], UNEXPECTED_ERROR_MESSAGE);
}

#[tokio::test]
async fn panic_handler_returns_generic_500() {
    let payload: Box<dyn std::any::Any + Send + 'static> = Box::new("index out of bounds");

    let (status, json) = into_parts(handle_panic(payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "An unexpected error occurred");
}

// ---------------------------------------------------------------------------
// Timeouts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_error_returns_504_envelope() {
    let (status, json) = error_to_response(AppError::Timeout).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], TIMEOUT_MESSAGE);
}

#[tokio::test]
async fn timeout_envelope_rewrites_empty_504() {
    let mut bare = Response::new(axum::body::Body::empty());
    *bare.status_mut() = StatusCode::GATEWAY_TIMEOUT;

    let (status, json) = into_parts(timeout_envelope(bare).await).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["message"], TIMEOUT_MESSAGE);
}

#[tokio::test]
async fn timeout_envelope_leaves_other_responses_alone() {
    let response = AppError::BadRequest("bad body".into()).into_response();

    let (status, json) = into_parts(timeout_envelope(response).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad body");
}
