//! Async consumer loop for the location subscription.
//!
//! Receives position samples, applies baseline suppression, and dispatches
//! venue fetches as independent tasks.
//!
//! # Design Notes
//!
//! The consumer uses `tokio::select!` with biased polling so cancellation
//! is observed before further samples. Fetches do not block the consumer: a
//! sample arriving while a fetch is outstanding is evaluated against the
//! current baseline and may dispatch a second, overlapping fetch. Each
//! dispatch is tagged with a monotonically increasing sequence number, and
//! a completing fetch applies its result only if its number is still the
//! latest dispatched - a superseded result is discarded rather than racing
//! the newer one for the view state.

use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use crate::geo::Position;
use crate::venues::{self, Venue, VenueClient};

use super::config::RefreshConfig;
use super::core::CoordinatorState;
use super::state::ViewState;

/// Consume position samples until cancelled or the stream closes.
pub(super) async fn consume_positions<C: VenueClient + 'static>(
    mut samples: broadcast::Receiver<Position>,
    cancel: CancellationToken,
    shared: Arc<Mutex<CoordinatorState>>,
    client: Arc<C>,
    config: RefreshConfig,
    view_tx: Arc<watch::Sender<ViewState>>,
) {
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,

            sample = samples.recv() => match sample {
                Ok(position) => {
                    process_sample(position, &shared, &client, &config, &view_tx);
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Position stream lagged - old samples dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Position stream closed, stopping consumer");
                    break;
                }
            },
        }
    }

    tracing::debug!("Location consumer stopped");
}

/// Evaluate one position sample: suppress it, or dispatch a fetch.
fn process_sample<C: VenueClient + 'static>(
    position: Position,
    shared: &Arc<Mutex<CoordinatorState>>,
    client: &Arc<C>,
    config: &RefreshConfig,
    view_tx: &Arc<watch::Sender<ViewState>>,
) {
    let seq = {
        let mut state = shared.lock().unwrap();

        if let Some(baseline) = state.baseline {
            let moved_m = baseline.distance_to(&position);
            if moved_m < config.suppression_distance_m {
                state.baseline = Some(position);
                tracing::debug!(
                    moved_m = format!("{:.1}", moved_m),
                    threshold_m = config.suppression_distance_m,
                    "Movement below threshold - fetch suppressed"
                );
                return;
            }
        }

        state.last_dispatched += 1;
        view_tx.send_replace(ViewState::Loading);
        state.last_dispatched
    };

    tracing::info!(
        seq,
        lat = format!("{:.5}", position.latitude),
        lon = format!("{:.5}", position.longitude),
        "Dispatching venue fetch"
    );

    let shared = Arc::clone(shared);
    let client = Arc::clone(client);
    let view_tx = Arc::clone(view_tx);
    tokio::spawn(async move {
        match client.fetch_nearby(position).await {
            Ok(mut result) => {
                venues::sort_by_distance(&mut result);
                apply_success(seq, position, result, &shared, &view_tx);
            }
            Err(error) => {
                tracing::warn!(seq, error = %error, "Venue fetch failed");
                restore_settled(seq, &shared, &view_tx);
            }
        }
    });
}

/// Apply a successful fetch result, unless it has been superseded.
fn apply_success(
    seq: u64,
    origin: Position,
    result: Vec<Venue>,
    shared: &Arc<Mutex<CoordinatorState>>,
    view_tx: &Arc<watch::Sender<ViewState>>,
) {
    let mut state = shared.lock().unwrap();

    if seq != state.last_dispatched {
        tracing::debug!(
            seq,
            latest = state.last_dispatched,
            "Stale fetch result discarded"
        );
        return;
    }
    if view_tx.borrow().is_denied() {
        tracing::debug!(seq, "Fetch completed after permission denial - result discarded");
        return;
    }

    state.baseline = Some(origin);
    state.settled = ViewState::VenueList(result);
    view_tx.send_replace(state.settled.clone());

    tracing::info!(seq, view = %state.settled, "View state updated");
}

/// Put the last settled view back after a failed fetch.
///
/// Failure policy is deferred to the embedder: the previous result (or
/// `Loading`, if nothing ever succeeded) stays visible, the baseline is
/// untouched, and no retry is scheduled.
fn restore_settled(
    seq: u64,
    shared: &Arc<Mutex<CoordinatorState>>,
    view_tx: &Arc<watch::Sender<ViewState>>,
) {
    let state = shared.lock().unwrap();

    if seq != state.last_dispatched {
        return;
    }
    if view_tx.borrow().is_denied() {
        return;
    }

    view_tx.send_replace(state.settled.clone());
}
