//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::config::MapDefaults;
use crate::domain::DomainError;
use crate::editor::EditOp;
use crate::geocode::LocationCandidate;
use crate::payload::{DayPayload, LocationPayload};
use crate::route::{Marker, MarkerRole, RouteGeometry, Segment, SegmentKind, Viewport};

/// A request carrying a whole itinerary.
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    /// Days in editor order
    pub itinerary: Vec<DayPayload>,
}

/// A request to apply one edit.
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    /// The itinerary before the edit
    pub itinerary: Vec<DayPayload>,

    /// The edit to apply
    pub op: EditOp,
}

/// An itinerary after an edit.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: Vec<DayPayload>,
}

/// A marker to draw.
#[derive(Debug, Serialize)]
pub struct MarkerResult {
    pub latitude: f64,
    pub longitude: f64,

    /// Day number the marker belongs to
    pub day: u32,

    /// Start or end of the day
    pub role: MarkerRole,

    /// Day description, possibly empty
    pub description: String,

    /// Hover text
    pub tooltip: String,
}

impl MarkerResult {
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            latitude: marker.position.latitude(),
            longitude: marker.position.longitude(),
            day: marker.day.get(),
            role: marker.role,
            description: marker.description.clone(),
            tooltip: marker.tooltip(),
        }
    }
}

/// A line to draw.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: LocationPayload,
    pub to: LocationPayload,
    pub kind: SegmentKind,
    pub label: String,
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            from: segment.from.into(),
            to: segment.to.into(),
            kind: segment.kind,
            label: segment.label.clone(),
        }
    }
}

/// How to fit the map to the viewport bounds.
#[derive(Debug, Serialize)]
pub struct FitOptions {
    /// Padding around the bounds, in pixels
    pub padding: u32,

    /// Never zoom in further than this when fitting
    pub max_zoom: u8,
}

/// Everything the map needs to render an itinerary.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub markers: Vec<MarkerResult>,
    pub segments: Vec<SegmentResult>,

    /// Bounds to fit, absent when nothing is drawn
    pub viewport: Option<Viewport>,

    /// Initial center: the viewport focus, or the default center
    pub center: LocationPayload,

    /// Zoom to use with `center` before fitting
    pub zoom: u8,

    pub fit: FitOptions,
}

impl RouteResponse {
    pub fn new(geometry: &RouteGeometry, map: &MapDefaults) -> Self {
        Self {
            markers: geometry.markers.iter().map(MarkerResult::from_marker).collect(),
            segments: geometry
                .segments
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            viewport: geometry.viewport,
            center: geometry.center_or(map.default_center).into(),
            zoom: map.default_zoom,
            fit: FitOptions {
                padding: map.fit_padding_px,
                max_zoom: map.max_fit_zoom,
            },
        }
    }
}

/// One reason an itinerary cannot be saved.
#[derive(Debug, Serialize)]
pub struct IssueResult {
    /// Position in the itinerary
    pub index: usize,

    /// Day number at that position
    pub day: u32,

    /// Human-readable description
    pub message: String,
}

impl IssueResult {
    /// Describe a save-blocking error, if it refers to a specific day.
    pub fn from_error(err: &DomainError) -> Option<Self> {
        match err {
            DomainError::IncompleteDay { index, day, .. } => Some(Self {
                index: *index,
                day: day.get(),
                message: err.to_string(),
            }),
            DomainError::IndexOutOfRange { .. } => None,
        }
    }
}

/// Save-readiness of an itinerary.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub complete: bool,
    pub issues: Vec<IssueResult>,
}

impl ValidateResponse {
    pub fn from_errors(errors: &[DomainError]) -> Self {
        let issues: Vec<IssueResult> = errors.iter().filter_map(IssueResult::from_error).collect();
        Self {
            complete: issues.is_empty(),
            issues,
        }
    }
}

/// Request to search for places.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A place in search results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl From<LocationCandidate> for LocationResult {
    fn from(candidate: LocationCandidate) -> Self {
        Self {
            latitude: candidate.coordinate.latitude(),
            longitude: candidate.coordinate.longitude(),
            display_name: candidate.display_name,
        }
    }
}

/// Response for place search.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub results: Vec<LocationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
