//! Route derivation for the itinerary map.
//!
//! Turns an [`Itinerary`](crate::domain::Itinerary) into the markers,
//! segments and viewport a map collaborator draws. Derivation is pure and
//! recomputed on every call.

mod derive;
mod equality;
mod geometry;

pub use derive::{RouteDeriver, derive_route};
pub use equality::{ExactEquality, PointEquality, WithinTolerance};
pub use geometry::{BoundingBox, Marker, MarkerRole, RouteGeometry, Segment, SegmentKind, Viewport};
