//! Copy-on-write edits over an itinerary.
//!
//! Every function takes the current itinerary by reference and returns a new
//! one; the argument is never modified. Index-based edits fail with
//! [`DomainError::IndexOutOfRange`] when `index` is outside `[0, len)`.

use crate::domain::{Coordinate, DomainError, Itinerary, ItineraryDay};

/// Append a new day.
///
/// The new day is numbered one past the highest existing day number (day 1
/// for an empty itinerary), has an empty description, starts at the
/// [`Coordinate::PLACEHOLDER`] and has no end. The caller must pick a real
/// start before the day can be saved.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Itinerary;
/// use itinerary_server::editor;
///
/// let one = editor::add_day(&Itinerary::empty());
/// let two = editor::add_day(&one);
/// assert_eq!(two.days()[1].day.get(), 2);
/// ```
pub fn add_day(itinerary: &Itinerary) -> Itinerary {
    let new_day = ItineraryDay::new(itinerary.next_day_number(), Coordinate::PLACEHOLDER);
    itinerary
        .iter()
        .cloned()
        .chain(std::iter::once(new_day))
        .collect()
}

/// Replace the description of the day at `index`.
pub fn set_description(
    itinerary: &Itinerary,
    index: usize,
    text: impl Into<String>,
) -> Result<Itinerary, DomainError> {
    let text = text.into();
    update_day(itinerary, index, |day| day.description = text)
}

/// Replace the start location of the day at `index`.
pub fn set_start(
    itinerary: &Itinerary,
    index: usize,
    coordinate: Coordinate,
) -> Result<Itinerary, DomainError> {
    update_day(itinerary, index, |day| day.start = Some(coordinate))
}

/// Set the end location of the day at `index`, creating it if absent.
pub fn set_end(
    itinerary: &Itinerary,
    index: usize,
    coordinate: Coordinate,
) -> Result<Itinerary, DomainError> {
    update_day(itinerary, index, |day| day.end = Some(coordinate))
}

/// Remove the end location of the day at `index` entirely.
pub fn clear_end(itinerary: &Itinerary, index: usize) -> Result<Itinerary, DomainError> {
    update_day(itinerary, index, |day| day.end = None)
}

/// Give the day at `index` an end location, initialized to its start.
///
/// The new end equals the start, so nothing extra is drawn until the caller
/// moves it. A day without a start gets the placeholder. An existing end is
/// left as it is.
pub fn add_end_location(itinerary: &Itinerary, index: usize) -> Result<Itinerary, DomainError> {
    update_day(itinerary, index, |day| {
        if day.end.is_none() {
            day.end = Some(day.start.unwrap_or(Coordinate::PLACEHOLDER));
        }
    })
}

/// Remove the day at `index`. Remaining day numbers are not renumbered.
pub fn remove_day(itinerary: &Itinerary, index: usize) -> Result<Itinerary, DomainError> {
    check_index(itinerary, index)?;
    Ok(itinerary
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, day)| day.clone())
        .collect())
}

/// Move the day at `from` so that it ends up at position `to`.
///
/// Day numbers travel with their days.
pub fn move_day(itinerary: &Itinerary, from: usize, to: usize) -> Result<Itinerary, DomainError> {
    check_index(itinerary, from)?;
    check_index(itinerary, to)?;

    let mut days = itinerary.days().to_vec();
    let day = days.remove(from);
    days.insert(to, day);
    Ok(Itinerary::new(days))
}

fn check_index(itinerary: &Itinerary, index: usize) -> Result<(), DomainError> {
    if index >= itinerary.len() {
        return Err(DomainError::IndexOutOfRange {
            index,
            len: itinerary.len(),
        });
    }
    Ok(())
}

/// Copy the itinerary, applying `edit` to the day at `index`.
fn update_day<F>(itinerary: &Itinerary, index: usize, edit: F) -> Result<Itinerary, DomainError>
where
    F: FnOnce(&mut ItineraryDay),
{
    check_index(itinerary, index)?;

    let mut days = itinerary.days().to_vec();
    edit(&mut days[index]);
    Ok(Itinerary::new(days))
}
