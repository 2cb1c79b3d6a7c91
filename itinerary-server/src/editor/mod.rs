//! Itinerary editing.
//!
//! Pure, copy-on-write edit operations used by the package editor, the
//! [`EditOp`] wire form of those edits, and the save-time completeness
//! check. None of these functions modify their argument.

mod edit_op;
mod ops;
mod validate;

pub use edit_op::{EditError, EditOp};
pub use ops::{
    add_day, add_end_location, clear_end, move_day, remove_day, set_description, set_end,
    set_start,
};
pub use validate::{incomplete_days, validate_for_save};
