//! Provider trait for position subscriptions.

use tokio::sync::broadcast;

use crate::geo::Position;

/// Trait for subscribing to position updates (push API).
///
/// Each call to [`subscribe`] yields an independent receiver over an
/// infinite sequence of samples; dropping the receiver ends that
/// subscription, and subscribing again restarts from the live stream.
/// Samples received before the first poll are buffered by the channel.
///
/// [`subscribe`]: LocationProvider::subscribe
pub trait LocationProvider: Send + Sync {
    /// Subscribe to position updates.
    fn subscribe(&self) -> broadcast::Receiver<Position>;
}
