//! Itinerary day types.

use std::fmt;

use serde::Serialize;

use super::Coordinate;

/// Error returned when a day number is not positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day number {0}: must be at least 1")]
pub struct InvalidDayNumber(pub u32);

/// A positive day label.
///
/// Day numbers are display labels, not positions: an itinerary may contain
/// gaps or duplicates after edits.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::DayNumber;
///
/// let day = DayNumber::new(3).unwrap();
/// assert_eq!(day.get(), 3);
/// assert_eq!(day.to_string(), "3");
///
/// assert!(DayNumber::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayNumber(u32);

impl DayNumber {
    /// The first day.
    pub const FIRST: DayNumber = DayNumber(1);

    /// Construct a day number, rejecting zero.
    pub fn new(n: u32) -> Result<Self, InvalidDayNumber> {
        if n == 0 {
            return Err(InvalidDayNumber(n));
        }
        Ok(Self(n))
    }

    /// Returns the numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns the following day number, saturating at `u32::MAX`.
    pub fn next(&self) -> DayNumber {
        DayNumber(self.0.saturating_add(1))
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One day's travel record.
///
/// `start` is `None` only while a day is still being entered (for example a
/// payload that arrived without a start location). Such a day is invisible
/// on the map and must be rejected before saving; see
/// [`crate::editor::validate_for_save`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: DayNumber,
    pub description: String,
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
}

impl ItineraryDay {
    /// Create a day with a start location, no description and no end.
    pub fn new(day: DayNumber, start: Coordinate) -> Self {
        Self {
            day,
            description: String::new(),
            start: Some(start),
            end: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the end location.
    pub fn with_end(mut self, end: Coordinate) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns the end location if it is present and differs from the start.
    ///
    /// An end equal to the start draws nothing, the same as no end at all.
    pub fn distinct_end(&self) -> Option<Coordinate> {
        let start = self.start?;
        self.end.filter(|end| !end.equals(&start))
    }

    /// Where travel leaves this day: the distinct end if any, else the start.
    pub fn exit_point(&self) -> Option<Coordinate> {
        self.distinct_end().or(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn day_number_rejects_zero() {
        assert_eq!(DayNumber::new(0), Err(InvalidDayNumber(0)));
        assert_eq!(
            InvalidDayNumber(0).to_string(),
            "invalid day number 0: must be at least 1"
        );
    }

    #[test]
    fn day_number_next_saturates() {
        assert_eq!(DayNumber::FIRST.next().get(), 2);
        assert_eq!(DayNumber::new(u32::MAX).unwrap().next().get(), u32::MAX);
    }

    #[test]
    fn new_day_has_start_only() {
        let day = ItineraryDay::new(DayNumber::FIRST, coord(1.0, 2.0));
        assert_eq!(day.start, Some(coord(1.0, 2.0)));
        assert_eq!(day.end, None);
        assert!(day.description.is_empty());
    }

    #[test]
    fn distinct_end_ignores_equal_end() {
        let day = ItineraryDay::new(DayNumber::FIRST, coord(1.0, 2.0)).with_end(coord(1.0, 2.0));
        assert_eq!(day.distinct_end(), None);
        assert_eq!(day.exit_point(), Some(coord(1.0, 2.0)));
    }

    #[test]
    fn distinct_end_present() {
        let day = ItineraryDay::new(DayNumber::FIRST, coord(1.0, 2.0)).with_end(coord(3.0, 4.0));
        assert_eq!(day.distinct_end(), Some(coord(3.0, 4.0)));
        assert_eq!(day.exit_point(), Some(coord(3.0, 4.0)));
    }

    #[test]
    fn missing_start_has_no_exit() {
        let day = ItineraryDay {
            day: DayNumber::FIRST,
            description: String::new(),
            start: None,
            end: Some(coord(3.0, 4.0)),
        };
        assert_eq!(day.distinct_end(), None);
        assert_eq!(day.exit_point(), None);
    }
}
