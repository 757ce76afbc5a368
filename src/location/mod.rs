//! Position stream seam
//!
//! This module defines the subscription interface the coordinator consumes
//! position samples through:
//!
//! - [`LocationProvider`] - subscription API (push)
//! - [`LocationFeed`] - in-process fan-out implementation that position
//!   sources (telemetry bridges, replay drivers, tests) publish into
//!
//! How samples are produced - sensor fusion, provider selection, permission
//! enforcement - is the source's concern, not this crate's.

mod feed;
mod provider;

pub use feed::{LocationFeed, DEFAULT_FEED_CAPACITY};
pub use provider::LocationProvider;
