//! The location lookup contract.
//!
//! The editor awaits a resolver before it calls
//! [`editor::set_start`](crate::editor::set_start) or
//! [`editor::set_end`](crate::editor::set_end); the itinerary core itself
//! never talks to one.

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::domain::{Coordinate, InvalidCoordinate};

use super::error::GeocodeError;

/// One search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    pub coordinate: Coordinate,
    pub display_name: String,
}

/// A click on the map, in the map library's `{ lat, lng }` form.
///
/// Longitude may exceed ±180 when the map has been panned across the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapClick {
    pub lat: f64,
    pub lng: f64,
}

impl MapClick {
    /// Longitude wrapped into `[-180, 180]`.
    pub fn wrapped_longitude(&self) -> f64 {
        if (-180.0..=180.0).contains(&self.lng) {
            self.lng
        } else {
            (self.lng + 180.0).rem_euclid(360.0) - 180.0
        }
    }
}

/// Resolves free text and map clicks to coordinates.
pub trait LocationResolver: Send + Sync {
    /// Search for up to `limit` candidates matching `query`, best first.
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<LocationCandidate>, GeocodeError>>;

    /// The coordinate under a map click.
    fn resolve_click(&self, click: MapClick) -> Result<Coordinate, InvalidCoordinate> {
        Coordinate::new(click.lat, click.wrapped_longitude())
    }
}
