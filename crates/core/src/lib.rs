//! Domain logic for the temple reservation service.
//!
//! Nothing in this crate performs I/O: it cleans and validates reservation
//! input so the storage and HTTP layers only ever see well-formed values.

pub mod error;
pub mod normalizer;
pub mod reservation;
pub mod types;
