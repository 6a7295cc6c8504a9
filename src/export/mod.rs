//! Export functionality for Wealth Architect
//!
//! Projections can be written as CSV or JSON; affirmation batches as JSON.

pub mod csv;
pub mod json;

pub use self::csv::write_projection_csv;
pub use self::json::{write_json, AffirmationExport, ProjectionExport, EXPORT_SCHEMA_VERSION};
