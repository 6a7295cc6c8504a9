//! JSON Export functionality
//!
//! Wraps projections and affirmation batches in a versioned envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::WealthResult;
use crate::models::{Affirmation, Projection, ProjectionPoint, ProjectionRequest};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A projection as written to disk or stdout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub request: ProjectionRequest,
    pub final_total: f64,
    pub multiplier: f64,
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionExport {
    /// Build an export from a computed projection
    pub fn new(projection: &Projection) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            request: projection.request,
            final_total: projection.final_total(),
            multiplier: projection.multiplier(),
            points: projection.points.clone(),
        }
    }
}

/// An affirmation batch; `affirmations` keeps the service's field name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub amount: String,
    pub affirmations: Vec<Affirmation>,
}

impl AffirmationExport {
    /// Build an export for the amount the batch was generated for
    pub fn new(amount: impl Into<String>, affirmations: Vec<Affirmation>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            amount: amount.into(),
            affirmations,
        }
    }
}

/// Write any export as pretty JSON followed by a newline
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> WealthResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::projection::build_projection;

    #[test]
    fn test_projection_export() {
        let projection = build_projection(ProjectionRequest::new(500, 10.0, 3)).unwrap();
        let export = ProjectionExport::new(&projection);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.points.len(), 4);
        assert_eq!(export.request.years, 3);

        let mut buffer = Vec::new();
        write_json(&export, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["request"]["principal"], 500);
        assert_eq!(value["points"][0]["total"], 500.0);
    }

    #[test]
    fn test_affirmation_export_keeps_field_name() {
        let export = AffirmationExport::new(
            "1,000",
            vec![Affirmation {
                id: 1,
                category: "c".into(),
                content: "x".into(),
            }],
        );
        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["affirmations"][0]["id"], 1);
        assert_eq!(value["amount"], "1,000");
    }
}
