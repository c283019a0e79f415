//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod reservation_repo;

pub use reservation_repo::ReservationRepo;
