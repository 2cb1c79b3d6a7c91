//! Server configuration.
//!
//! Every setting has a default; `main` overrides them from environment
//! variables via [`ServerConfig::from_env`].

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::Coordinate;
use crate::geocode::{CacheConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, NominatimConfig};

/// Address to listen on.
pub const BIND_ADDR_VAR: &str = "ITINERARY_BIND_ADDR";
/// Nominatim base URL.
pub const BASE_URL_VAR: &str = "NOMINATIM_BASE_URL";
/// `User-Agent` sent to the geocoder.
pub const USER_AGENT_VAR: &str = "GEOCODER_USER_AGENT";
/// When set to a true value, search uses the built-in landmark list.
pub const OFFLINE_VAR: &str = "GEOCODER_OFFLINE";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid {var} {value:?}: expected 1/0, true/false, yes/no or on/off")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Geocoder settings.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Nominatim base URL
    pub base_url: String,

    /// Identifies this application to the geocoder
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Use the built-in landmark list instead of the network
    pub offline: bool,

    /// How long search results stay cached
    pub cache_ttl: Duration,

    /// Maximum number of cached searches
    pub cache_capacity: u64,

    /// Result count when the caller gives none
    pub default_limit: usize,

    /// Upper bound on the result count a caller may ask for
    pub max_limit: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            offline: false,
            cache_ttl: Duration::from_secs(10 * 60),
            cache_capacity: 1000,
            default_limit: 5,
            max_limit: 20,
        }
    }
}

impl GeocoderConfig {
    /// Set the Nominatim base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Switch to the built-in landmark list.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Client settings for [`NominatimClient`](crate::geocode::NominatimClient).
    pub fn nominatim(&self) -> NominatimConfig {
        NominatimConfig::default()
            .with_base_url(&self.base_url)
            .with_user_agent(&self.user_agent)
            .with_timeout(self.timeout_secs)
    }

    /// Settings for [`CachedResolver`](crate::geocode::CachedResolver).
    pub fn cache(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.cache_ttl,
            max_capacity: self.cache_capacity,
        }
    }

    /// Clamp a requested result count into `1..=max_limit`.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit.max(1))
    }
}

/// How the map frames itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDefaults {
    /// Center shown when nothing has been drawn yet
    pub default_center: Coordinate,

    /// Zoom level used with the default center
    pub default_zoom: u8,

    /// Padding around fitted bounds, in pixels
    pub fit_padding_px: u32,

    /// Fitting to bounds never zooms in further than this
    pub max_fit_zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            default_center: Coordinate::NAIROBI,
            default_zoom: 6,
            fit_padding_px: 20,
            max_fit_zoom: 12,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Geocoder settings
    pub geocoder: GeocoderConfig,

    /// Map framing
    pub map: MapDefaults,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            geocoder: GeocoderConfig::default(),
            map: MapDefaults::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                    source,
                })?;
        }

        if let Some(value) = lookup(BASE_URL_VAR) {
            config.geocoder.base_url = non_empty(BASE_URL_VAR, value)?;
        }

        if let Some(value) = lookup(USER_AGENT_VAR) {
            config.geocoder.user_agent = non_empty(USER_AGENT_VAR, value)?;
        }

        if let Some(value) = lookup(OFFLINE_VAR) {
            config.geocoder.offline = parse_flag(OFFLINE_VAR, &value)?;
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
