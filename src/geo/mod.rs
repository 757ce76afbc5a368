//! Geographic primitives
//!
//! Provides the [`Position`] value type used throughout the crate, with
//! geodesic distance between positions computed via the haversine formula.

mod position;

pub use position::{GeoError, Position, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
