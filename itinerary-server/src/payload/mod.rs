//! JSON input contract for itineraries.
//!
//! Forms and stored packages exchange itineraries as arrays of day objects
//! with `day`, `description`, `start_location` and optional `end_location`.
//! The wire types here accept that shape as-is; conversion into the domain
//! model validates every coordinate and day number.

mod convert;
mod types;

pub use convert::{PayloadError, PayloadErrorKind};
pub use types::{DayPayload, LocationPayload};
