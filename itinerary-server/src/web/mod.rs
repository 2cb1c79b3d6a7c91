//! Web layer for the itinerary editor.
//!
//! JSON endpoints for deriving map geometry, applying edits, checking
//! save-readiness and looking up locations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
