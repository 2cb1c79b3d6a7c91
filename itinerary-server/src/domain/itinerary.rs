//! Itinerary type.
//!
//! An `Itinerary` is the ordered day-by-day plan of one travel package.
//! Order is sequence position; the `day` labels are kept aligned by the
//! editor but nothing here depends on them being contiguous or unique.

use super::{DayNumber, ItineraryDay};

/// An ordered sequence of itinerary days.
///
/// Values are never mutated through this type's API; the editor functions
/// in [`crate::editor`] return new itineraries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Create an itinerary from days in travel order.
    pub fn new(days: Vec<ItineraryDay>) -> Self {
        Self { days }
    }

    /// Create an empty itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the days in travel order.
    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    /// Returns the day at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ItineraryDay> {
        self.days.get(index)
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if there are no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over the days in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, ItineraryDay> {
        self.days.iter()
    }

    /// The label a newly appended day gets: one past the highest existing
    /// label, or day 1 for an empty itinerary.
    pub fn next_day_number(&self) -> DayNumber {
        self.days
            .iter()
            .map(|d| d.day)
            .max()
            .map_or(DayNumber::FIRST, |max| max.next())
    }

    /// Consume the itinerary, returning its days.
    pub fn into_days(self) -> Vec<ItineraryDay> {
        self.days
    }
}

impl FromIterator<ItineraryDay> for Itinerary {
    fn from_iter<I: IntoIterator<Item = ItineraryDay>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a ItineraryDay;
    type IntoIter = std::slice::Iter<'a, ItineraryDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
