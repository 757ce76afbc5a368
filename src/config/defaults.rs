//! Default values and constants for all configuration settings.
//!
//! The domain defaults live next to the components that use them (the
//! coordinator and places client configs); this module wires them into the
//! config-file `Default` impls so each literal exists exactly once.

use std::path::PathBuf;

use crate::coordinator::DEFAULT_SUPPRESSION_DISTANCE_M;
use crate::venues::{DEFAULT_PLACES_BASE_URL, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_RADIUS_M};

use super::settings::{LoggingSettings, PlacesSettings, RefreshSettings};

/// Default log directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "venuewatch.log";

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            suppression_distance_m: DEFAULT_SUPPRESSION_DISTANCE_M,
        }
    }
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            api_key: None,
            radius_m: DEFAULT_SEARCH_RADIUS_M,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
