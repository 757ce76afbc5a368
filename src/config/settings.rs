//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Refresh coordinator settings
    pub refresh: RefreshSettings,
    /// Places API settings
    pub places: PlacesSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Refresh coordinator configuration.
#[derive(Debug, Clone)]
pub struct RefreshSettings {
    /// Minimum movement in meters before a venue refresh is dispatched.
    pub suppression_distance_m: f64,
}

/// Places API configuration.
#[derive(Debug, Clone)]
pub struct PlacesSettings {
    /// Base URL of the places search API.
    pub base_url: String,
    /// API key for the places service (None = unauthenticated).
    pub api_key: Option<String>,
    /// Search radius in meters.
    pub radius_m: u32,
    /// Maximum number of venues per fetch.
    pub limit: u32,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}
