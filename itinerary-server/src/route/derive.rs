//! Itinerary to map geometry.
//!
//! Walks the days in array order. Each day with a start contributes a
//! start marker, and an end marker plus an intra-day route when its end is
//! a different point. Consecutive array positions are joined by a connector
//! when the first day's exit point differs from the next day's start.
//!
//! The walk is by raw position: a day without a start draws nothing and
//! also breaks the chain, so the days on either side of it are not joined.

use tracing::debug;

use crate::domain::{Coordinate, Itinerary, ItineraryDay};

use super::equality::{ExactEquality, PointEquality};
use super::geometry::{BoundingBox, Marker, MarkerRole, RouteGeometry, Segment, Viewport};

/// Derives markers, segments and a viewport from an itinerary.
///
/// Derivation is total: it never fails, and an itinerary with no drawable
/// day yields empty geometry with no viewport.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::{Coordinate, DayNumber, Itinerary, ItineraryDay};
/// use itinerary_server::route::{RouteDeriver, SegmentKind};
///
/// let day1 = ItineraryDay::new(DayNumber::new(1).unwrap(), Coordinate::new(0.0, 0.0).unwrap());
/// let day2 = ItineraryDay::new(DayNumber::new(2).unwrap(), Coordinate::new(1.0, 1.0).unwrap());
/// let itinerary = Itinerary::new(vec![day1, day2]);
///
/// let geometry = RouteDeriver::new().derive(&itinerary);
/// assert_eq!(geometry.markers.len(), 2);
/// assert_eq!(geometry.segments[0].kind, SegmentKind::InterDayConnector);
/// assert_eq!(geometry.segments[0].label, "Day 1 to Day 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteDeriver<E = ExactEquality> {
    equality: E,
}

impl RouteDeriver<ExactEquality> {
    /// A deriver using exact coordinate equality.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: PointEquality> RouteDeriver<E> {
    /// A deriver using a custom "same point" strategy.
    pub fn with_equality(equality: E) -> Self {
        Self { equality }
    }

    /// Derive render-ready geometry for `itinerary`.
    pub fn derive(&self, itinerary: &Itinerary) -> RouteGeometry {
        let days = itinerary.days();
        let mut markers = Vec::with_capacity(days.len() * 2);
        let mut segments = Vec::with_capacity(days.len() * 2);

        for (i, day) in days.iter().enumerate() {
            let Some(start) = day.start else {
                debug!(index = i, day = %day.day, "skipping day without start location");
                continue;
            };

            markers.push(marker(day, start, MarkerRole::Start));

            let distinct_end = day.end.filter(|end| !self.equality.same_point(end, &start));
            if let Some(end) = distinct_end {
                markers.push(marker(day, end, MarkerRole::End));
                segments.push(Segment::intra_day(start, end, day.day));
            }

            let exit = distinct_end.unwrap_or(start);
            if let Some(next) = days.get(i + 1) {
                if let Some(next_start) = next.start {
                    if !self.equality.same_point(&exit, &next_start) {
                        segments.push(Segment::connector(exit, next_start, day.day, next.day));
                    }
                }
            }
        }

        let viewport = viewport_of(&markers);

        debug!(
            days = days.len(),
            markers = markers.len(),
            segments = segments.len(),
            "derived itinerary route"
        );

        RouteGeometry {
            markers,
            segments,
            viewport,
        }
    }
}

/// Derive geometry with exact coordinate equality.
pub fn derive_route(itinerary: &Itinerary) -> RouteGeometry {
    RouteDeriver::new().derive(itinerary)
}

fn marker(day: &ItineraryDay, position: Coordinate, role: MarkerRole) -> Marker {
    Marker {
        position,
        day: day.day,
        description: day.description.clone(),
        role,
    }
}

/// Bounds of every marker position, focused on the middle one.
fn viewport_of(markers: &[Marker]) -> Option<Viewport> {
    let bounds = BoundingBox::enclosing(markers.iter().map(|m| &m.position))?;
    let focus = markers[markers.len() / 2].position;
    Some(Viewport { bounds, focus })
}

#[cfg(test)]
#[path = "derive_tests.rs"]
mod tests;
