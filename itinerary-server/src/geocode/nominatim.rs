//! Nominatim (OpenStreetMap) search client.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::resolver::{LocationCandidate, LocationResolver};

/// Default base URL for the public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default `User-Agent`; Nominatim's usage policy requires one.
pub const DEFAULT_USER_AGENT: &str = "Foundation Admin Portal";

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Identifies this application to the geocoder
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl NominatimConfig {
    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// One entry of a Nominatim `format=json` search response.
///
/// Coordinates arrive as decimal strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for the Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| GeocodeError::Config("invalid User-Agent header value".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for places matching `query`.
    ///
    /// A blank query returns no candidates without contacting the server.
    pub async fn fetch_candidates(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationCandidate>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.base_url);
        let limit_param = limit.to_string();
        debug!(query, limit, "searching nominatim");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let mut candidates = parse_candidates(&body)?;
        candidates.truncate(limit);

        debug!(query, found = candidates.len(), "nominatim search complete");
        Ok(candidates)
    }
}

impl LocationResolver for NominatimClient {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<LocationCandidate>, GeocodeError>> {
        self.fetch_candidates(query, limit).boxed()
    }
}

/// Parse a search response body, dropping hits without usable coordinates.
fn parse_candidates(body: &str) -> Result<Vec<LocationCandidate>, GeocodeError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })?;

    Ok(hits
        .into_iter()
        .filter_map(|hit| match parse_coordinate(&hit.lat, &hit.lon) {
            Some(coordinate) => Some(LocationCandidate {
                coordinate,
                display_name: hit.display_name,
            }),
            None => {
                warn!(
                    lat = %hit.lat,
                    lon = %hit.lon,
                    name = %hit.display_name,
                    "dropping geocoder hit with invalid coordinates"
                );
                None
            }
        })
        .collect())
}

fn parse_coordinate(lat: &str, lon: &str) -> Option<Coordinate> {
    let lat = lat.trim().parse::<f64>().ok()?;
    let lon = lon.trim().parse::<f64>().ok()?;
    Coordinate::new(lat, lon).ok()
}
