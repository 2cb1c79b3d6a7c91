//! Geographic coordinate type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing a coordinate from invalid values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    latitude: f64,
    longitude: f64,
    reason: &'static str,
}

impl InvalidCoordinate {
    /// Returns the rejection reason.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A validated (latitude, longitude) pair in degrees.
///
/// Latitude is always in `[-90, 90]` and longitude in `[-180, 180]`,
/// and both are finite. This type guarantees validity by construction.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Coordinate;
///
/// let nairobi = Coordinate::new(-1.2921, 36.8219).unwrap();
/// assert_eq!(nairobi.latitude(), -1.2921);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// The value new itinerary days are seeded with before a real
    /// location is picked.
    pub const PLACEHOLDER: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Nairobi, where the map opens before anything is drawn.
    pub const NAIROBI: Coordinate = Coordinate {
        latitude: -1.2921,
        longitude: 36.8219,
    };

    /// Construct a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let reject = |reason| InvalidCoordinate {
            latitude,
            longitude,
            reason,
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(reject("values must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(reject("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(reject("longitude must be within [-180, 180]"));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Exact "same point" comparison.
    ///
    /// Two coordinates are the same point only if both components compare
    /// equal as floats. Coordinates that differ in the last decimal (for
    /// example from two independent geocoder lookups) are distinct. See
    /// [`crate::route::PointEquality`] for a tolerant alternative.
    pub fn equals(&self, other: &Coordinate) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }

    /// Returns true if this is the `(0, 0)` placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.equals(&Self::PLACEHOLDER)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
