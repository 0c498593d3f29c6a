//! Web layer for the restroom locator.
//!
//! Serves the search page, the facility listing (JSON or HTML fragment) and
//! place-name geocoding.

mod directions;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use directions::directions_url;
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
