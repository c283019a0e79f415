//! Domain model structs.
//!
//! Row structs mirror the table exactly; the public structs carry the
//! types the rest of the service works with.

pub mod reservation;
