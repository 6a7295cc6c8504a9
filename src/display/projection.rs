//! Projection display formatting
//!
//! Formats a projection for terminal output: year table, summary card and a
//! text bar chart.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_multiplier, format_rate, separator};
use crate::models::{format_short, Projection, Vnd};

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Năm")]
    year: u32,
    #[tabled(rename = "Vốn gốc")]
    principal: String,
    #[tabled(rename = "Lãi")]
    interest: String,
    #[tabled(rename = "Tổng")]
    total: String,
}

/// Format the year-by-year table
pub fn format_projection_table(projection: &Projection) -> String {
    let rows: Vec<ProjectionRow> = projection
        .points
        .iter()
        .map(|p| ProjectionRow {
            year: p.year,
            principal: Vnd::from_f64(p.principal).to_string(),
            interest: Vnd::from_f64(p.interest).to_string(),
            total: Vnd::from_f64(p.total).to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the headline figures
pub fn format_projection_summary(projection: &Projection) -> String {
    let request = &projection.request;
    let mut output = String::new();

    output.push_str(&format!(
        "Vốn gốc: {}  │  Lãi suất kép: {}/năm  │  Thời gian: {} năm\n",
        Vnd::from_dong(request.principal as i64),
        format_rate(request.annual_rate_percent),
        request.years
    ));
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Tài sản dự kiến sau {} năm: {}\n",
        request.years,
        projection.final_amount()
    ));
    output.push_str(&format!(
        "Gấp {} lần vốn gốc\n",
        format_multiplier(projection.multiplier())
    ));

    output
}

/// Format a horizontal bar per year, scaled to the largest total
pub fn format_growth_chart(projection: &Projection, width: usize) -> String {
    let max = projection.max_total();
    let label_width = projection
        .points
        .iter()
        .map(|p| format_short(p.total).chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for point in &projection.points {
        output.push_str(&format!(
            "{:>3} │{} {:>label_width$}\n",
            point.year,
            format_bar(point.total, max, width),
            format_short(point.total),
            label_width = label_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectionRequest;
    use crate::services::projection::build_projection;

    fn sample() -> Projection {
        build_projection(ProjectionRequest::new(1_000_000, 10.0, 2)).unwrap()
    }

    #[test]
    fn test_table_contains_every_year() {
        let table = format_projection_table(&sample());
        assert!(table.contains("Năm"));
        assert!(table.contains("1.000.000\u{a0}₫"));
        assert!(table.contains("1.100.000\u{a0}₫"));
        assert!(table.contains("1.210.000\u{a0}₫"));
        assert!(table.contains("210.000\u{a0}₫"));
    }

    #[test]
    fn test_summary() {
        let summary = format_projection_summary(&sample());
        assert!(summary.contains("Tài sản dự kiến sau 2 năm: 1.210.000\u{a0}₫"));
        assert!(summary.contains("Gấp 1.21 lần vốn gốc"));
        assert!(summary.contains("10%/năm"));
    }

    #[test]
    fn test_growth_chart_has_one_line_per_point() {
        let chart = format_growth_chart(&sample(), 20);
        assert_eq!(chart.lines().count(), 3);
        let last = chart.lines().last().unwrap();
        assert_eq!(last.chars().filter(|c| *c == '█').count(), 20);
        assert!(last.ends_with("1.2M"));
    }
}
