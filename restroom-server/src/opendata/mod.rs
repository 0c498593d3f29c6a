//! NYC Open Data restroom datasets.
//!
//! Fetches the three restroom datasets, normalizes them into facilities,
//! and falls back to a bundled dataset when live data is unavailable.

mod client;
mod datasets;
mod error;
mod fallback;
mod loader;

pub use client::{DatasetSource, OpenDataClient, OpenDataConfig};
pub use datasets::{AUTOMATIC, Dataset, NYC_DATASETS, OPERATIONAL, PARKS};
pub use error::OpenDataError;
pub use fallback::FallbackDataset;
pub use loader::{DataOrigin, FacilityLoader, LoadOutcome};
