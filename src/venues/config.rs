//! Configuration for the places client.

/// Default base URL of the places search API.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://api.foursquare.com/v3";

/// Default search radius around the query origin, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 1000;

/// Default maximum number of venues per search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Configuration for [`PlacesClient`](super::PlacesClient).
#[derive(Debug, Clone)]
pub struct PlacesClientConfig {
    /// Base URL of the places API.
    pub base_url: String,

    /// API key sent in the `Authorization` header. Requests without a key
    /// are sent unauthenticated and will be rejected by the real service.
    pub api_key: Option<String>,

    /// Search radius in meters.
    pub radius_m: u32,

    /// Maximum number of venues per search.
    pub limit: u32,
}

impl PlacesClientConfig {
    /// Build from the `[places]` section of the config file.
    pub fn from_settings(settings: &crate::config::PlacesSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            radius_m: settings.radius_m,
            limit: settings.limit,
        }
    }
}

impl Default for PlacesClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            api_key: None,
            radius_m: DEFAULT_SEARCH_RADIUS_M,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacesClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_PLACES_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.radius_m, 1000);
        assert_eq!(config.limit, 20);
    }

    #[test]
    fn test_from_settings() {
        let settings = crate::config::PlacesSettings {
            base_url: "https://places.example.com/v3".to_string(),
            api_key: Some("secret".to_string()),
            radius_m: 500,
            limit: 10,
        };

        let config = PlacesClientConfig::from_settings(&settings);
        assert_eq!(config.base_url, "https://places.example.com/v3");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.radius_m, 500);
        assert_eq!(config.limit, 10);
    }
}
