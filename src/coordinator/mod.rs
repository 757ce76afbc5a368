//! Location-driven venue refresh coordination
//!
//! This module is the core of the crate: a small state machine over an
//! asynchronous position stream with cancellation semantics. Lifecycle
//! events start and stop a cancellable subscription to the location stream;
//! each position sample either silently advances a suppression baseline
//! (movement below the configured threshold) or dispatches a venue fetch
//! whose result becomes the new view state.
//!
//! # Architecture
//!
//! ```text
//!  lifecycle events ──► ┌─────────────────────┐ ◄── position stream
//!  (grant/deny/bg)      │ RefreshCoordinator  │     (broadcast)
//!                       │  baseline           │
//!                       │  subscription slot  │──► fetch tasks
//!                       │  fetch sequencing   │     (venue client)
//!                       └─────────┬───────────┘
//!                                 ▼
//!                        ViewState (watch channel)
//! ```
//!
//! # View state lifecycle
//!
//! - `Loading` initially and while a fetch is in flight
//! - `VenueList` after a successful fetch, sorted ascending by distance
//! - `PermissionDenied` after a denial event, until a new grant leads to a
//!   fetch dispatch
//!
//! Failed fetches restore the last settled view; backgrounding pauses
//! updates without touching the view.
//!
//! # Components
//!
//! - `state` - [`ViewState`] and [`LifecycleEvent`] types
//! - `config` - [`RefreshConfig`] with the suppression distance
//! - `core` - [`RefreshCoordinator`] and lifecycle transitions
//! - `runner` - async consumer loop and fetch dispatch

mod config;
mod core;
mod runner;
mod state;

pub use config::{RefreshConfig, DEFAULT_SUPPRESSION_DISTANCE_M};
pub use core::RefreshCoordinator;
pub use state::{LifecycleEvent, ViewState};
