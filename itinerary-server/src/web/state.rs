//! Application state for the web layer.

use std::sync::Arc;

use crate::config::{GeocoderConfig, MapDefaults};
use crate::geocode::LocationResolver;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Location search and map-click resolution
    pub resolver: Arc<dyn LocationResolver>,

    /// Geocoder limits
    pub geocoder: Arc<GeocoderConfig>,

    /// Map framing defaults
    pub map: Arc<MapDefaults>,
}

impl AppState {
    /// Create a new app state.
    pub fn new<R>(resolver: R, geocoder: GeocoderConfig, map: MapDefaults) -> Self
    where
        R: LocationResolver + 'static,
    {
        Self {
            resolver: Arc::new(resolver),
            geocoder: Arc::new(geocoder),
            map: Arc::new(map),
        }
    }
}
