//! CSV Export functionality
//!
//! Exports a projection as one row per year.

use std::io::Write;

use crate::error::WealthResult;
use crate::models::Projection;

/// Write the projection series as CSV (year, principal, interest, total)
pub fn write_projection_csv<W: Write>(projection: &Projection, writer: W) -> WealthResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in &projection.points {
        csv_writer.serialize(point)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectionRequest;
    use crate::services::projection::build_projection;

    #[test]
    fn test_export_projection_csv() {
        let projection = build_projection(ProjectionRequest::new(1_000_000, 0.0, 2)).unwrap();
        let mut buffer = Vec::new();
        write_projection_csv(&projection, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "year,principal,interest,total");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0,1000000.0,0.0,1000000.0");
        assert_eq!(lines[3], "2,1000000.0,0.0,1000000.0");
    }
}
