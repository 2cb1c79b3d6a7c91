//! Render-ready geometry produced by the route deriver.
//!
//! Everything here is a plain value recomputed on every derivation. A map
//! collaborator draws markers and segments as given and frames the view
//! from the viewport; visual padding around the bounds is its concern.

use std::fmt;

use serde::Serialize;

use crate::domain::{Coordinate, DayNumber};

/// Whether a marker sits at the start or the end of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerRole {
    Start,
    End,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::Start => f.write_str("Start"),
            MarkerRole::End => f.write_str("End"),
        }
    }
}

/// A point to draw, labeled with its day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub day: DayNumber,
    pub description: String,
    pub role: MarkerRole,
}

impl Marker {
    /// Hover text, e.g. `"Day 2 (End): Lake Naivasha"`.
    pub fn tooltip(&self) -> String {
        let description = if self.description.is_empty() {
            "No description"
        } else {
            self.description.as_str()
        };
        format!("Day {} ({}): {}", self.day, self.role, description)
    }
}

/// What a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    /// Travel within one day, start to end.
    IntraDayRoute,
    /// A jump from where one day leaves off to where the next day begins.
    InterDayConnector,
}

/// A line to draw between two coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: SegmentKind,
    pub label: String,
}

impl Segment {
    pub(crate) fn intra_day(from: Coordinate, to: Coordinate, day: DayNumber) -> Self {
        Self {
            from,
            to,
            kind: SegmentKind::IntraDayRoute,
            label: format!("Day {day}"),
        }
    }

    pub(crate) fn connector(
        from: Coordinate,
        to: Coordinate,
        from_day: DayNumber,
        to_day: DayNumber,
    ) -> Self {
        Self {
            from,
            to,
            kind: SegmentKind::InterDayConnector,
            label: format!("Day {from_day} to Day {to_day}"),
        }
    }
}

/// Minimal latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// The degenerate box containing a single point.
    pub fn around(point: &Coordinate) -> Self {
        Self {
            south: point.latitude(),
            west: point.longitude(),
            north: point.latitude(),
            east: point.longitude(),
        }
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: &Coordinate) {
        self.south = self.south.min(point.latitude());
        self.north = self.north.max(point.latitude());
        self.west = self.west.min(point.longitude());
        self.east = self.east.max(point.longitude());
    }

    /// Returns true if `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.south..=self.north).contains(&point.latitude())
            && (self.west..=self.east).contains(&point.longitude())
    }

    /// The smallest box containing every point, or `None` for no points.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut points = points.into_iter();
        let mut bounds = Self::around(points.next()?);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }
}

/// Where to frame the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Exact bounds of every marker position.
    pub bounds: BoundingBox,
    /// Suggested initial center: the middle marker position in emission
    /// order.
    pub focus: Coordinate,
}

/// Output of one route derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteGeometry {
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
    pub viewport: Option<Viewport>,
}

impl RouteGeometry {
    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.segments.is_empty()
    }

    /// The viewport focus, or `fallback` when nothing was drawn.
    pub fn center_or(&self, fallback: Coordinate) -> Coordinate {
        self.viewport.map_or(fallback, |v| v.focus)
    }

    /// Segments of one kind, in emission order.
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.kind == kind)
    }
}
