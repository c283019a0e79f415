//! Reservation intake: turns raw request fields into a [`NewReservation`].
//!
//! Every field is sanitized first; required fields that end up empty are
//! rejected before anything reaches storage.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;
use crate::normalizer::{normalize_time, sanitize, TIME_FORMAT_MESSAGE};

/// Message returned when name, date or time is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, date, and time are required.";

/// Message returned when the date is not an ISO calendar date.
pub const DATE_FORMAT_MESSAGE: &str = "Date must be in YYYY-MM-DD format.";

/// Longest accepted value for any text field, in characters.
pub const MAX_FIELD_CHARS: usize = 255;

/// Message returned when a field exceeds [`MAX_FIELD_CHARS`].
pub const FIELD_TOO_LONG_MESSAGE: &str = "Name, date, and time must be at most 255 characters.";

/// Message returned when a field contains a NUL character.
pub const NUL_CHARACTER_MESSAGE: &str = "Name, date, and time must not contain NUL characters.";

/// Canonical storage format for reservation times.
pub const TIME_STORAGE_FORMAT: &str = "%H:%M:%S";

/// A validated reservation ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_vip: bool,
}

/// Sanitize and validate the raw fields of a create request.
///
/// The required-field check runs on the sanitized, trimmed values, so a
/// name made only of markup counts as missing.
pub fn validate_new_reservation(
    name: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
    is_vip: bool,
) -> Result<NewReservation, CoreError> {
    let name = sanitize(name).trim().to_string();
    let date = sanitize(date).trim().to_string();
    let time = sanitize(time).trim().to_string();

    if name.is_empty() || date.is_empty() || time.is_empty() {
        return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    for field in [&name, &date, &time] {
        check_storable(field)?;
    }

    let canonical_time = normalize_time(&time)?;
    let time = NaiveTime::parse_from_str(&canonical_time, TIME_STORAGE_FORMAT)
        .map_err(|_| CoreError::Validation(TIME_FORMAT_MESSAGE.to_string()))?;

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(DATE_FORMAT_MESSAGE.to_string()))?;

    Ok(NewReservation {
        name,
        date,
        time,
        is_vip,
    })
}

/// Reject text PostgreSQL would refuse for a `VARCHAR(255)` column.
fn check_storable(field: &str) -> Result<(), CoreError> {
    if field.contains('\0') {
        return Err(CoreError::Validation(NUL_CHARACTER_MESSAGE.to_string()));
    }
    if field.chars().count() > MAX_FIELD_CHARS {
        return Err(CoreError::Validation(FIELD_TOO_LONG_MESSAGE.to_string()));
    }
    Ok(())
}
