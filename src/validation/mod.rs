//! Validation Module
//!
//! Pure functions that turn raw, string-typed query values into normalized
//! queries or a 400 validation error. Nothing here performs I/O.

mod apod;
mod rover;

#[cfg(test)]
mod property_tests;

pub use apod::{earliest_apod_date, validate_apod_query, validate_apod_query_on, ApodQuery};
pub use rover::{validate_rover_query, Rover, RoverQuery};
