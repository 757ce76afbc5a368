//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [refresh] section
    if let Some(section) = ini.section(Some("refresh")) {
        if let Some(v) = section.get("suppression_distance") {
            let parsed: f64 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "refresh".to_string(),
                key: "suppression_distance".to_string(),
                value: v.to_string(),
                reason: "must be a non-negative number of meters".to_string(),
            })?;
            if !parsed.is_finite() || parsed < 0.0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "refresh".to_string(),
                    key: "suppression_distance".to_string(),
                    value: v.to_string(),
                    reason: "must be a non-negative number of meters".to_string(),
                });
            }
            config.refresh.suppression_distance_m = parsed;
        }
    }

    // [places] section
    if let Some(section) = ini.section(Some("places")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim().trim_end_matches('/');
            if !v.is_empty() {
                config.places.base_url = v.to_string();
            }
        }
        if let Some(v) = section.get("api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.places.api_key = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("radius") {
            let parsed: u32 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "places".to_string(),
                key: "radius".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer (meters)".to_string(),
            })?;
            if parsed == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "places".to_string(),
                    key: "radius".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (meters)".to_string(),
                });
            }
            config.places.radius_m = parsed;
        }
        if let Some(v) = section.get("limit") {
            let parsed: u32 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "places".to_string(),
                key: "limit".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer".to_string(),
            })?;
            if parsed == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "places".to_string(),
                    key: "limit".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer".to_string(),
                });
            }
            config.places.limit = parsed;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = PathBuf::from(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).expect("test INI should parse");
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.refresh.suppression_distance_m, 20.0);
        assert_eq!(config.places.limit, 20);
    }

    #[test]
    fn test_refresh_section() {
        let config = parse("[refresh]\nsuppression_distance = 50.5\n").unwrap();
        assert_eq!(config.refresh.suppression_distance_m, 50.5);
    }

    #[test]
    fn test_refresh_invalid_distance() {
        let result = parse("[refresh]\nsuppression_distance = twenty\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { ref section, ref key, .. })
                if section == "refresh" && key == "suppression_distance"
        ));
    }

    #[test]
    fn test_refresh_negative_distance_rejected() {
        let result = parse("[refresh]\nsuppression_distance = -5\n");
        assert!(matches!(result, Err(ConfigFileError::InvalidValue { .. })));
    }

    #[test]
    fn test_places_section() {
        let config = parse(
            "[places]\n\
             base_url = https://places.example.com/v3/\n\
             api_key = fsq3secret\n\
             radius = 500\n\
             limit = 10\n",
        )
        .unwrap();

        // Trailing slash is stripped so URL joining stays predictable
        assert_eq!(config.places.base_url, "https://places.example.com/v3");
        assert_eq!(config.places.api_key.as_deref(), Some("fsq3secret"));
        assert_eq!(config.places.radius_m, 500);
        assert_eq!(config.places.limit, 10);
    }

    #[test]
    fn test_places_blank_api_key_is_none() {
        let config = parse("[places]\napi_key =   \n").unwrap();
        assert!(config.places.api_key.is_none());
    }

    #[test]
    fn test_places_zero_limit_rejected() {
        let result = parse("[places]\nlimit = 0\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { ref key, .. }) if key == "limit"
        ));
    }

    #[test]
    fn test_logging_section() {
        let config = parse("[logging]\ndirectory = /var/log/venuewatch\nfile = today.log\n").unwrap();
        assert_eq!(
            config.logging.directory,
            PathBuf::from("/var/log/venuewatch")
        );
        assert_eq!(config.logging.file, "today.log");
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = parse("[future]\nsomething = else\n").unwrap();
        assert_eq!(config.refresh.suppression_distance_m, 20.0);
    }
}
