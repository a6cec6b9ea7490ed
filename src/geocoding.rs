//! Geocoding client for `OpenMeteo` integration
//!
//! Resolves a free-text destination into coordinates for the map section.
//! One best-effort attempt per submission; an unresolved destination is a
//! soft failure handled by the planner.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::GeocodingConfig;
use crate::models::Location;
use crate::{Result, WanderMateError};

/// Resolves free-text place names into coordinates
#[async_trait]
pub trait GeocodeService: Send + Sync {
    /// Resolve a place name to candidate locations, best match first
    async fn resolve(&self, query: &str) -> Result<Vec<Location>>;
}

/// Geocoding client backed by the `OpenMeteo` geocoding API (no API key)
pub struct GeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(config: GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("WanderMate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WanderMateError::geocoding(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GeocodeService for GeocodingClient {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}/search?name={}&count=5&language=en&format=json",
            self.config.base_url,
            urlencoding::encode(query)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WanderMateError::geocoding(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WanderMateError::geocoding(format!(
                "Geocoding API returned status {}",
                response.status()
            )));
        }

        let body: openmeteo::GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WanderMateError::geocoding(format!("Invalid geocoding response: {e}")))?;

        let locations: Vec<Location> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        if locations.is_empty() {
            warn!("No geocoding results for '{}'", query);
            return Err(WanderMateError::geocoding(format!(
                "Location not found: {query}"
            )));
        }

        info!("Found {} geocoding results for '{}'", locations.len(), query);
        Ok(locations)
    }
}

/// `OpenMeteo` geocoding API response structures
mod openmeteo {
    use serde::Deserialize;

    use crate::models::Location;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub admin1: Option<String>,
    }

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            let name = match &result.admin1 {
                Some(admin1) => format!("{}, {}", result.name, admin1),
                None => result.name,
            };
            Location {
                latitude: result.latitude,
                longitude: result.longitude,
                name,
                country: result.country,
            }
        }
    }
}
