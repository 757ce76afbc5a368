//! View state and lifecycle event types.

use crate::venues::Venue;

/// What the embedding application should currently display.
///
/// Exactly one view state is current at any instant; transitions are driven
/// by lifecycle events and fetch outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// No usable result yet, or a fetch is in flight.
    #[default]
    Loading,

    /// Venues from the last successful fetch, sorted ascending by distance.
    VenueList(Vec<Venue>),

    /// Location permission was denied; updates cannot run until re-granted.
    PermissionDenied,
}

impl ViewState {
    /// Returns true if no usable result is available yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if permission was denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::VenueList(venues) => write!(f, "VenueList({} venues)", venues.len()),
            Self::PermissionDenied => write!(f, "PermissionDenied"),
        }
    }
}

/// Lifecycle events from the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Location permission was granted; position updates may start.
    PermissionGranted,

    /// Location permission was denied or revoked.
    PermissionDenied,

    /// The application moved to the background.
    GoToBackground,
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionGranted => write!(f, "PermissionGranted"),
            Self::PermissionDenied => write!(f, "PermissionDenied"),
            Self::GoToBackground => write!(f, "GoToBackground"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_default_is_loading() {
        assert_eq!(ViewState::default(), ViewState::Loading);
        assert!(ViewState::default().is_loading());
    }

    #[test]
    fn test_view_state_predicates() {
        assert!(ViewState::PermissionDenied.is_denied());
        assert!(!ViewState::Loading.is_denied());
        assert!(!ViewState::VenueList(Vec::new()).is_loading());
    }

    #[test]
    fn test_view_state_display() {
        assert_eq!(format!("{}", ViewState::Loading), "Loading");
        assert_eq!(
            format!("{}", ViewState::VenueList(Vec::new())),
            "VenueList(0 venues)"
        );
        assert_eq!(
            format!("{}", ViewState::PermissionDenied),
            "PermissionDenied"
        );
    }

    #[test]
    fn test_lifecycle_event_display() {
        assert_eq!(
            format!("{}", LifecycleEvent::PermissionGranted),
            "PermissionGranted"
        );
        assert_eq!(format!("{}", LifecycleEvent::GoToBackground), "GoToBackground");
    }
}
