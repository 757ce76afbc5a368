//! In-process location feed.

use tokio::sync::broadcast;

use crate::geo::Position;

use super::provider::LocationProvider;

/// Default broadcast channel capacity for position samples.
///
/// Position sources emit at low rates (around 1 Hz); slow consumers lag
/// rather than block the source.
pub const DEFAULT_FEED_CAPACITY: usize = 16;

/// In-process location feed - fan-out point between position sources and
/// subscribers.
///
/// Sources push samples via [`publish`]; consumers attach via
/// [`LocationProvider::subscribe`]. The feed itself applies no filtering or
/// rate limiting.
///
/// [`publish`]: LocationFeed::publish
#[derive(Debug)]
pub struct LocationFeed {
    tx: broadcast::Sender<Position>,
}

impl LocationFeed {
    /// Create a feed with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a position sample to all current subscribers.
    ///
    /// Returns the number of subscribers the sample was delivered to
    /// (zero when nobody is listening; the sample is dropped).
    pub fn publish(&self, position: Position) -> usize {
        match self.tx.send(position) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!("Position sample dropped - no subscribers");
                0
            }
        }
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for LocationFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl LocationProvider for LocationFeed {
    fn subscribe(&self) -> broadcast::Receiver<Position> {
        self.tx.subscribe()
    }
}
