//! Venue records and the places API client
//!
//! This module provides the [`VenueClient`] trait abstracting over remote
//! venue search services, and [`PlacesClient`], an HTTP implementation
//! against a Foursquare-style places search endpoint.
//!
//! The coordinator treats venues as opaque apart from their pre-computed
//! distance attribute, which it uses only for sorting.

mod client;
mod config;
mod error;
mod types;

pub use client::{PlacesClient, VenueClient};
pub use config::{
    PlacesClientConfig, DEFAULT_PLACES_BASE_URL, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_RADIUS_M,
};
pub use error::VenueError;
pub use types::{sort_by_distance, Venue};
