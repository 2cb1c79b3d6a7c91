//! Save-time validation.
//!
//! Route derivation tolerates unfinished days by not drawing them. Saving
//! must not: a day whose start is unset, or still the placeholder that
//! [`add_day`](super::add_day) seeds, is reported here so the save layer
//! can reject it.

use crate::domain::{DomainError, Itinerary};

/// Every incomplete day, in itinerary order.
pub fn incomplete_days(itinerary: &Itinerary) -> Vec<DomainError> {
    itinerary
        .iter()
        .enumerate()
        .filter_map(|(index, day)| {
            let reason = match day.start {
                None => "start location not set",
                Some(start) if start.is_placeholder() => "start location still the placeholder",
                Some(_) => return None,
            };
            Some(DomainError::IncompleteDay {
                index,
                day: day.day,
                reason,
            })
        })
        .collect()
}

/// Check that an itinerary can be saved, returning the first incomplete day.
pub fn validate_for_save(itinerary: &Itinerary) -> Result<(), DomainError> {
    match incomplete_days(itinerary).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
