//! Domain error types.
//!
//! These errors represent contract violations against an itinerary value:
//! editing a day that does not exist, or saving a day that is not finished.
//! They are distinct from payload, geocoding and HTTP errors.

use super::DayNumber;

/// Domain-level errors for itinerary edits and save validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An edit targeted a day position outside the itinerary
    #[error("day index {index} out of range (itinerary has {len} days)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A day cannot be saved yet
    #[error("day {day} (position {index}) is incomplete: {reason}")]
    IncompleteDay {
        index: usize,
        day: DayNumber,
        reason: &'static str,
    },
}
