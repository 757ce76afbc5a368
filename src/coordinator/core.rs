//! Core refresh coordinator implementation.
//!
//! This module contains the [`RefreshCoordinator`] struct and its lifecycle
//! transitions. The async consumer loop that processes position samples is
//! in the separate [`super::runner`] module.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::geo::Position;
use crate::location::LocationProvider;
use crate::venues::VenueClient;

use super::config::RefreshConfig;
use super::runner;
use super::state::{LifecycleEvent, ViewState};

// ─────────────────────────────────────────────────────────────────────────────
// Coordinator
// ─────────────────────────────────────────────────────────────────────────────

/// Location-driven venue refresh coordinator.
///
/// Owns the current [`ViewState`], the suppression baseline and the
/// cancellable subscription to the location stream. Lifecycle events are
/// processed synchronously by [`handle`]; position samples are consumed by
/// a spawned task, and venue fetches run as independent tasks that report
/// back through a sequence-number freshness gate.
///
/// # Concurrency
///
/// [`handle`] and the view accessors may be called from any thread. Mutable
/// state is guarded by a mutex that is never held across an await point;
/// view-state transitions go through a watch channel while the lock is
/// held, so every transition is atomic and immediately visible to
/// [`current_view`] and subscribers.
///
/// [`handle`]: RefreshCoordinator::handle
/// [`current_view`]: RefreshCoordinator::current_view
pub struct RefreshCoordinator<C: VenueClient> {
    /// Source of position samples.
    locations: Arc<dyn LocationProvider>,

    /// Client used to fetch venues near a position.
    client: Arc<C>,

    /// Configuration.
    config: RefreshConfig,

    /// Current view state, observable via `current_view` / `subscribe_views`.
    view_tx: Arc<watch::Sender<ViewState>>,

    /// Baseline, subscription slot and fetch sequencing.
    shared: Arc<Mutex<CoordinatorState>>,
}

/// Mutable coordinator state behind the lock.
#[derive(Default)]
pub(super) struct CoordinatorState {
    /// Position the venue list was last fetched from, advanced by
    /// suppressed samples. Absent until the first fetch succeeds or the
    /// first sample is suppressed against it.
    pub(super) baseline: Option<Position>,

    /// Active location subscription, if any.
    pub(super) subscription: Option<Subscription>,

    /// Sequence number of the most recently dispatched fetch.
    pub(super) last_dispatched: u64,

    /// Last fetch-settled view (`Loading` until the first success).
    /// Restored when a fetch fails, so the previous result stays visible.
    pub(super) settled: ViewState,
}

/// Handle to the active location subscription.
pub(super) struct Subscription {
    /// Cancels the consumer task. Cancelling twice is a no-op.
    pub(super) cancel: CancellationToken,
}

impl Subscription {
    fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl<C: VenueClient + 'static> RefreshCoordinator<C> {
    /// Create a new coordinator.
    ///
    /// The initial view state is [`ViewState::Loading`]; nothing runs until
    /// a [`LifecycleEvent::PermissionGranted`] event arrives.
    pub fn new(
        locations: Arc<dyn LocationProvider>,
        client: Arc<C>,
        config: RefreshConfig,
    ) -> Self {
        let (view_tx, _) = watch::channel(ViewState::Loading);

        Self {
            locations,
            client,
            config,
            view_tx: Arc::new(view_tx),
            shared: Arc::new(Mutex::new(CoordinatorState::default())),
        }
    }

    /// Process one lifecycle event.
    ///
    /// Returns immediately; position consumption and venue fetches run as
    /// spawned tasks. Repeated grants while the subscription is active are
    /// no-ops, as are repeated cancellations. Must be called within a Tokio
    /// runtime.
    pub fn handle(&self, event: LifecycleEvent) {
        tracing::debug!(event = %event, "Lifecycle event received");

        match event {
            LifecycleEvent::PermissionGranted => self.activate(),
            LifecycleEvent::PermissionDenied => self.deactivate_and_deny(),
            LifecycleEvent::GoToBackground => self.deactivate(),
        }
    }

    /// Latest view state (pull). Never blocks.
    pub fn current_view(&self) -> ViewState {
        self.view_tx.borrow().clone()
    }

    /// Subscribe to view-state transitions (push).
    pub fn subscribe_views(&self) -> watch::Receiver<ViewState> {
        self.view_tx.subscribe()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Start consuming the location stream, unless already doing so.
    fn activate(&self) {
        let mut shared = self.shared.lock().unwrap();
        if shared
            .subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
        {
            tracing::debug!("Location subscription already active - ignoring grant");
            return;
        }

        // Check-and-replace under the lock, and subscribe before spawning,
        // so a re-entrant grant can neither leak a previous subscription
        // nor miss samples published before the consumer first polls.
        let cancel = CancellationToken::new();
        let samples = self.locations.subscribe();
        shared.subscription = Some(Subscription {
            cancel: cancel.clone(),
        });
        drop(shared);

        tracing::info!("Location subscription started");
        tokio::spawn(runner::consume_positions(
            samples,
            cancel,
            Arc::clone(&self.shared),
            Arc::clone(&self.client),
            self.config.clone(),
            Arc::clone(&self.view_tx),
        ));
    }

    /// Cancel the subscription, preserving the current view state.
    fn deactivate(&self) {
        let mut shared = self.shared.lock().unwrap();
        if let Some(subscription) = shared.subscription.take() {
            subscription.cancel.cancel();
            tracing::info!("Location subscription cancelled");
        }
    }

    /// Cancel the subscription and show the denial state.
    fn deactivate_and_deny(&self) {
        let mut shared = self.shared.lock().unwrap();
        if let Some(subscription) = shared.subscription.take() {
            subscription.cancel.cancel();
        }
        // Written under the lock so the denial is ordered before any fetch
        // result that checks for it.
        self.view_tx.send_replace(ViewState::PermissionDenied);
        drop(shared);

        tracing::info!("Permission denied - venue updates stopped");
    }
}

impl<C: VenueClient> std::fmt::Debug for RefreshCoordinator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.shared.lock().unwrap();
        f.debug_struct("RefreshCoordinator")
            .field("config", &self.config)
            .field("view", &*self.view_tx.borrow())
            .field("baseline", &shared.baseline)
            .field(
                "subscription_active",
                &shared
                    .subscription
                    .as_ref()
                    .is_some_and(Subscription::is_active),
            )
            .field("last_dispatched", &shared.last_dispatched)
            .finish()
    }
}
