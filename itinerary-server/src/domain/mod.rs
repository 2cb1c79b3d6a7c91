//! Domain types for the itinerary model.
//!
//! This module contains the validated value types that describe a
//! day-by-day travel plan. Coordinates and day numbers enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod coordinate;
mod day;
mod error;
mod itinerary;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use day::{DayNumber, InvalidDayNumber, ItineraryDay};
pub use error::DomainError;
pub use itinerary::Itinerary;
