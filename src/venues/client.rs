//! Venue client trait and HTTP places implementation.
//!
//! The [`VenueClient`] trait abstracts over remote venue search services,
//! allowing the coordinator to work with any backend that can resolve a
//! position to a list of venues. The [`PlacesClient`] implementation talks
//! to a Foursquare-style `places/search` endpoint via `reqwest`.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use crate::geo::Position;

use super::config::PlacesClientConfig;
use super::error::VenueError;
use super::types::Venue;

/// HTTP timeout for a single search request.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for fetching venues near a position.
///
/// The order of the returned list is unspecified; callers sort as needed.
/// Each venue carries a service-computed distance from the query origin.
pub trait VenueClient: Send + Sync {
    /// Fetch venues near the given origin.
    fn fetch_nearby(
        &self,
        origin: Position,
    ) -> impl Future<Output = Result<Vec<Venue>, VenueError>> + Send;
}

/// Top-level places search response.
///
/// We only deserialize the `results` array; other fields are ignored.
#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<PlaceRecord>,
}

/// One place record from the search response.
///
/// This is our own type, decoupled from the wire format beyond the fields
/// needed to build a [`Venue`].
#[derive(Debug, Clone, Deserialize)]
struct PlaceRecord {
    fsq_id: String,
    name: String,
    #[serde(default)]
    distance: u32,
    location: Option<PlaceLocation>,
}

#[derive(Debug, Clone, Deserialize)]
struct PlaceLocation {
    formatted_address: Option<String>,
}

impl PlaceRecord {
    fn into_venue(self) -> Venue {
        Venue {
            id: self.fsq_id,
            name: self.name,
            address: self.location.and_then(|l| l.formatted_address),
            distance_m: self.distance,
        }
    }
}

/// Places client using direct HTTP requests.
///
/// Issues `GET {base_url}/places/search` with the query origin, radius and
/// result limit, authenticating via an API-key `Authorization` header.
/// Uses a reusable `reqwest::Client` with connection pooling and timeouts.
pub struct PlacesClient {
    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    /// Configuration.
    config: PlacesClientConfig,
}

impl PlacesClient {
    /// Create a new places client.
    pub fn new(config: PlacesClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, config }
    }
}

impl VenueClient for PlacesClient {
    async fn fetch_nearby(&self, origin: Position) -> Result<Vec<Venue>, VenueError> {
        let url = format!("{}/places/search", self.config.base_url);
        let ll = format!("{:.6},{:.6}", origin.latitude, origin.longitude);

        let mut request = self.http.get(&url).query(&[
            ("ll", ll.as_str()),
            ("radius", &self.config.radius_m.to_string()),
            ("limit", &self.config.limit.to_string()),
        ]);
        if let Some(ref key) = self.config.api_key {
            request = request.header("Authorization", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VenueError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VenueError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VenueError::HttpError(e.to_string()))?;

        let data: SearchResponse =
            serde_json::from_slice(&bytes).map_err(|e| VenueError::JsonError(e.to_string()))?;

        tracing::debug!(
            results = data.results.len(),
            ll = %ll,
            radius_m = self.config.radius_m,
            "Places search fetched"
        );

        Ok(data.results.into_iter().map(PlaceRecord::into_venue).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_client_creation() {
        let client = PlacesClient::new(PlacesClientConfig::default());
        assert_eq!(client.config.base_url, super::super::DEFAULT_PLACES_BASE_URL);
    }

    #[test]
    fn test_place_record_deserialize() {
        let json = r#"{
            "fsq_id": "5a187743ccad6b2b8c34c536",
            "name": "Brouwerij 't IJ",
            "distance": 870,
            "location": {
                "formatted_address": "Funenkade 7, 1018 AL Amsterdam"
            }
        }"#;

        let record: PlaceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fsq_id, "5a187743ccad6b2b8c34c536");
        assert_eq!(record.name, "Brouwerij 't IJ");
        assert_eq!(record.distance, 870);

        let venue = record.into_venue();
        assert_eq!(venue.distance_m, 870);
        assert_eq!(
            venue.address.as_deref(),
            Some("Funenkade 7, 1018 AL Amsterdam")
        );
    }

    #[test]
    fn test_place_record_missing_optional_fields() {
        // distance and location may be absent depending on query parameters
        let json = r#"{"fsq_id": "abc123", "name": "Somewhere"}"#;

        let record: PlaceRecord = serde_json::from_str(json).unwrap();
        let venue = record.into_venue();
        assert_eq!(venue.id, "abc123");
        assert_eq!(venue.distance_m, 0);
        assert!(venue.address.is_none());
    }

    #[test]
    fn test_search_response_deserialize_ignores_extra_fields() {
        // The real API sends many more fields per place - ensure we tolerate them
        let json = r#"{
            "results": [
                {
                    "fsq_id": "4b6d9b4cf964a520f06c2ce3",
                    "categories": [{"id": 13034, "name": "Café"}],
                    "chains": [],
                    "distance": 128,
                    "geocodes": {"main": {"latitude": 52.37, "longitude": 4.89}},
                    "link": "/v3/places/4b6d9b4cf964a520f06c2ce3",
                    "location": {
                        "country": "NL",
                        "formatted_address": "Spuistraat 2, Amsterdam",
                        "locality": "Amsterdam"
                    },
                    "name": "Café Hoppe",
                    "timezone": "Europe/Amsterdam"
                }
            ],
            "context": {"geo_bounds": {}}
        }"#;

        let data: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.results.len(), 1);

        let venue = data.results.into_iter().next().unwrap().into_venue();
        assert_eq!(venue.name, "Café Hoppe");
        assert_eq!(venue.distance_m, 128);
    }

    #[test]
    fn test_search_response_empty_results() {
        let data: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(data.results.is_empty());
    }
}
