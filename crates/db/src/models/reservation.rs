//! Reservation row and API-facing model.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use temple_core::types::DbId;

/// Stored value for a VIP reservation.
pub const VIP_STORED: i16 = 1;

/// Stored value for a regular reservation.
pub const REGULAR_STORED: i16 = 0;

/// A row from the `reservations` table, with `is_vip` as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_vip: i16,
}

/// A persisted reservation.
///
/// Serializes `date` as `YYYY-MM-DD` and `time` as `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_vip: bool,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            date: row.date,
            time: row.time,
            is_vip: vip_from_stored(row.is_vip),
        }
    }
}

/// Map the VIP flag to its stored integer.
pub fn vip_to_stored(is_vip: bool) -> i16 {
    if is_vip {
        VIP_STORED
    } else {
        REGULAR_STORED
    }
}

/// Map a stored integer back to the VIP flag. Anything non-zero is VIP.
pub fn vip_from_stored(stored: i16) -> bool {
    stored != REGULAR_STORED
}
