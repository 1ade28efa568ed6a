//! Shared error taxonomy and fixed-point unit conversion

pub mod errors;
pub mod fixed_point;
