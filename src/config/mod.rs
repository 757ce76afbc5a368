//! Configuration for venuewatch
//!
//! Loads user configuration from `~/.venuewatch/config.ini` with sensible
//! defaults. Settings structs live in `settings`, constants and `Default`
//! impls in `defaults`, INI parsing in `parser`, and file handling in
//! `file`.
//!
//! Sections:
//!
//! ```ini
//! [refresh]
//! suppression_distance = 20.0
//!
//! [places]
//! base_url = https://api.foursquare.com/v3
//! api_key = fsq3...
//! radius = 1000
//! limit = 20
//!
//! [logging]
//! directory = logs
//! file = venuewatch.log
//! ```

mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::{DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, PlacesSettings, RefreshSettings};
