//! Edits as data.
//!
//! An external form sends one [`EditOp`] per user action; applying it to
//! the current itinerary yields the next one.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DomainError, InvalidCoordinate, Itinerary};
use crate::payload::LocationPayload;

use super::ops;

/// Errors from applying an [`EditOp`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),
}

/// One itinerary edit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditOp {
    AddDay,
    SetDescription { index: usize, text: String },
    SetStart { index: usize, location: LocationPayload },
    SetEnd { index: usize, location: LocationPayload },
    ClearEnd { index: usize },
    AddEndLocation { index: usize },
    RemoveDay { index: usize },
    MoveDay { from: usize, to: usize },
}

impl EditOp {
    /// Apply this edit, returning the edited copy.
    pub fn apply(&self, itinerary: &Itinerary) -> Result<Itinerary, EditError> {
        let edited = match self {
            EditOp::AddDay => ops::add_day(itinerary),
            EditOp::SetDescription { index, text } => {
                ops::set_description(itinerary, *index, text.as_str())?
            }
            EditOp::SetStart { index, location } => {
                ops::set_start(itinerary, *index, Coordinate::try_from(*location)?)?
            }
            EditOp::SetEnd { index, location } => {
                ops::set_end(itinerary, *index, Coordinate::try_from(*location)?)?
            }
            EditOp::ClearEnd { index } => ops::clear_end(itinerary, *index)?,
            EditOp::AddEndLocation { index } => ops::add_end_location(itinerary, *index)?,
            EditOp::RemoveDay { index } => ops::remove_day(itinerary, *index)?,
            EditOp::MoveDay { from, to } => ops::move_day(itinerary, *from, *to)?,
        };
        Ok(edited)
    }
}
