//! In-memory resolver over a fixed list of places.
//!
//! Used for tests and when the server runs without network access.

use futures::future::BoxFuture;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::resolver::{LocationCandidate, LocationResolver};

/// Resolver that matches queries against a fixed list of named places.
///
/// A place matches when its name contains the query, ignoring case.
/// Results keep the order of the list.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    places: Vec<LocationCandidate>,
}

impl StaticResolver {
    /// Create a resolver over the given places.
    pub fn new(places: Vec<LocationCandidate>) -> Self {
        Self { places }
    }

    /// Add a place.
    pub fn with_place(mut self, name: impl Into<String>, coordinate: Coordinate) -> Self {
        self.places.push(LocationCandidate {
            coordinate,
            display_name: name.into(),
        });
        self
    }

    /// A handful of East African safari destinations.
    pub fn landmarks() -> Self {
        const LANDMARKS: &[(&str, f64, f64)] = &[
            ("Nairobi, Kenya", -1.2921, 36.8219),
            ("Maasai Mara National Reserve, Narok, Kenya", -1.4061, 35.0106),
            ("Lake Nakuru National Park, Nakuru, Kenya", -0.3667, 36.0833),
            ("Amboseli National Park, Kajiado, Kenya", -2.6527, 37.2606),
            ("Mount Kilimanjaro, Kilimanjaro, Tanzania", -3.0674, 37.3556),
            ("Serengeti National Park, Mara, Tanzania", -2.3333, 34.8333),
            ("Ngorongoro Crater, Arusha, Tanzania", -3.2, 35.5),
            ("Arusha, Tanzania", -3.3869, 36.683),
            ("Bwindi Impenetrable National Park, Uganda", -1.0667, 29.6667),
            ("Murchison Falls National Park, Uganda", 2.2783, 31.6853),
            ("Kigali, Rwanda", -1.9441, 30.0619),
        ];

        LANDMARKS
            .iter()
            .filter_map(|&(name, lat, lon)| {
                Coordinate::new(lat, lon)
                    .ok()
                    .map(|coordinate| LocationCandidate {
                        coordinate,
                        display_name: name.to_string(),
                    })
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Check if no places are known.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Matching places, in list order.
    pub fn lookup(&self, query: &str, limit: usize) -> Vec<LocationCandidate> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.places
            .iter()
            .filter(|place| place.display_name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

impl From<Vec<LocationCandidate>> for StaticResolver {
    fn from(places: Vec<LocationCandidate>) -> Self {
        Self::new(places)
    }
}

impl LocationResolver for StaticResolver {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<LocationCandidate>, GeocodeError>> {
        let found = self.lookup(query, limit);
        Box::pin(async move { Ok(found) })
    }
}
