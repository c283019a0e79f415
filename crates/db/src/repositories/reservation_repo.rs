//! Repository for the `reservations` table.
//!
//! Reservations are insert-and-read only: there is no update or delete path.

use sqlx::PgPool;
use temple_core::reservation::NewReservation;
use temple_core::types::DbId;

use crate::models::reservation::{vip_to_stored, Reservation, ReservationRow};

/// Column list for `reservations` queries.
const COLUMNS: &str = "id, name, date, time, is_vip";

/// Provides data access for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation, returning the id assigned by the database.
    pub async fn create(pool: &PgPool, input: &NewReservation) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO reservations (name, date, time, is_vip) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.date)
        .bind(input.time)
        .bind(vip_to_stored(input.is_vip))
        .fetch_one(pool)
        .await
    }

    /// List every reservation, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations ORDER BY id");
        let rows = sqlx::query_as::<_, ReservationRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}
