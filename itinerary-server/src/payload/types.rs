//! Wire types for itinerary payloads.

use serde::{Deserialize, Serialize};

/// A `{ latitude, longitude }` object as sent by the editor.
///
/// Not validated; see [`crate::domain::Coordinate`]. Extra fields such as
/// the picker's `address` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LocationPayload {
    pub latitude: f64,
    pub longitude: f64,
}

/// One day of an itinerary payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DayPayload {
    pub day: u32,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub start_location: Option<LocationPayload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<LocationPayload>,
}
