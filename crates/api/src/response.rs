//! Response envelope types for API handlers.
//!
//! Every API body carries a `status` of `"success"` or `"error"`, plus
//! either `data` or a human-readable `message`.

use serde::Serialize;
use temple_core::types::DbId;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{ "status": "success", "data": T }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data,
        }
    }
}

/// `{ "status": "success", "message": ..., "id": ... }` returned on create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub id: DbId,
}

/// `{ "status": "error", "message": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}
