//! Configuration for the refresh coordinator.

/// Default suppression distance in meters.
///
/// Movements below this distance advance the baseline without dispatching a
/// fetch. This is a policy value, not a fundamental constant - tune it via
/// the `[refresh]` config section.
pub const DEFAULT_SUPPRESSION_DISTANCE_M: f64 = 20.0;

/// Configuration for [`RefreshCoordinator`](super::RefreshCoordinator).
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Minimum movement (meters) from the baseline before a new fetch is
    /// dispatched. Samples below this advance the baseline silently,
    /// trading freshness for reduced network and battery cost.
    pub suppression_distance_m: f64,
}

impl RefreshConfig {
    /// Build from the `[refresh]` section of the config file.
    pub fn from_settings(settings: &crate::config::RefreshSettings) -> Self {
        Self {
            suppression_distance_m: settings.suppression_distance_m,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            suppression_distance_m: DEFAULT_SUPPRESSION_DISTANCE_M,
        }
    }
}
