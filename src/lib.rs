//! VenueWatch - location-driven venue refresh coordination
//!
//! This library watches a stream of device positions and keeps a list of
//! nearby venues fresh, fetching from a remote places API only when the
//! device has moved far enough for the previous result to be stale.
//!
//! # High-Level API
//!
//! The [`coordinator`] module is the entry point: wire a position source and
//! a venue client into a [`coordinator::RefreshCoordinator`], then drive it
//! with lifecycle events and observe its view state.
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use venuewatch::coordinator::{LifecycleEvent, RefreshConfig, RefreshCoordinator};
//! use venuewatch::location::{LocationFeed, LocationProvider};
//! use venuewatch::venues::{PlacesClient, PlacesClientConfig};
//!
//! let feed = Arc::new(LocationFeed::default());
//! let client = Arc::new(PlacesClient::new(PlacesClientConfig::default()));
//! let coordinator = RefreshCoordinator::new(
//!     Arc::clone(&feed) as Arc<dyn LocationProvider>,
//!     client,
//!     RefreshConfig::default(),
//! );
//!
//! coordinator.handle(LifecycleEvent::PermissionGranted);
//!
//! let mut views = coordinator.subscribe_views();
//! while views.changed().await.is_ok() {
//!     // render coordinator.current_view()
//! }
//! ```
//!
//! # Modules
//!
//! - [`coordinator`] - the refresh state machine (events, view state, suppression)
//! - [`geo`] - `Position` value type with geodesic distance
//! - [`location`] - position stream seam (`LocationProvider`, `LocationFeed`)
//! - [`venues`] - venue records and the places API client
//! - [`config`] - INI-backed configuration
//! - [`logging`] - tracing setup with file and stdout output

pub mod config;
pub mod coordinator;
pub mod geo;
pub mod location;
pub mod logging;
pub mod venues;

/// Version of the venuewatch library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
