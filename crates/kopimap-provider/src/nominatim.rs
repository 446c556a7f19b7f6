//! Search provider backed by the OSM Nominatim search API.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{ProviderError, RawPlace, Result, SearchProvider, SearchRegion, region::Coordinate};

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("kopimap/", env!("CARGO_PKG_VERSION"));

/// A [`SearchProvider`] that issues one HTTP GET per search against a
/// Nominatim-compatible endpoint.
///
/// The search region is passed along as a `viewbox` relevance bias, matching
/// how a map application wants "places near what I am looking at" rather
/// than a hard geographic filter. There is no retry; each request carries a
/// fixed 15-second timeout.
#[derive(Debug, Clone)]
pub struct NominatimProvider {
    client: Client,
    endpoint: String,
}

impl NominatimProvider {
    /// Create a provider against the public Nominatim endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a provider against a custom Nominatim-compatible endpoint,
    /// e.g. a self-hosted instance.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait::async_trait]
impl SearchProvider for NominatimProvider {
    #[instrument(name = "Nominatim search", level = "debug", skip(self, region))]
    async fn search(
        &self,
        query: &str,
        region: &SearchRegion,
        limit: usize,
    ) -> Result<Vec<RawPlace>> {
        if !region.is_finite() {
            return Err(ProviderError::InvalidRegion);
        }

        let params = [
            ("q", query.to_string()),
            ("format", "jsonv2".to_string()),
            ("viewbox", viewbox_param(region)),
            ("limit", limit.to_string()),
        ];
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let rows: Vec<SearchRow> = serde_json::from_str(&body)?;
        debug!(rows = rows.len(), "Nominatim response decoded");

        rows_to_places(rows)
    }
}

/// One entry of a Nominatim `jsonv2` search response.
///
/// Coordinates arrive as strings; `name` is frequently empty or missing for
/// results that only carry a full `display_name`.
#[derive(Debug, Deserialize)]
struct SearchRow {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

/// Format the region as a Nominatim `viewbox` value: `left,top,right,bottom`.
fn viewbox_param(region: &SearchRegion) -> String {
    format!(
        "{},{},{},{}",
        region.west(),
        region.north(),
        region.east(),
        region.south()
    )
}

fn rows_to_places(rows: Vec<SearchRow>) -> Result<Vec<RawPlace>> {
    rows.into_iter()
        .map(|row| {
            let latitude =
                row.lat
                    .parse::<f64>()
                    .map_err(|source| ProviderError::InvalidCoordinate {
                        field: "lat",
                        source,
                    })?;
            let longitude =
                row.lon
                    .parse::<f64>()
                    .map_err(|source| ProviderError::InvalidCoordinate {
                        field: "lon",
                        source,
                    })?;

            let name = row
                .name
                .filter(|n| !n.is_empty())
                .or_else(|| row.display_name.filter(|n| !n.is_empty()));

            Ok(RawPlace::new(name, Coordinate::new(latitude, longitude)))
        })
        .collect()
}
