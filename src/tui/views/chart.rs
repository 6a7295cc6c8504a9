//! Growth chart view
//!
//! Total and principal per year as two line series.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{format_short, Projection};
use crate::tui::app::App;

/// Chart title
pub const CHART_TITLE: &str = " Sức Mạnh Lãi Kép ";

/// Formula caption under the chart
pub const CHART_CAPTION: &str = " A = P(1 + r/n)^nt ";

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(CHART_TITLE)
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(CHART_CAPTION).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(projection) = app.state.projection.as_ref() else {
        let empty = Paragraph::new("Chưa có dữ liệu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let (totals, principals) = series(projection);
    let years = projection.request.years as f64;
    let max_total = projection.max_total().max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Tổng tài sản")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&totals),
        Dataset::default()
            .name("Vốn gốc")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&principals),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Năm")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, years])
                .labels(year_labels(projection.request.years)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_total])
                .labels(value_labels(max_total)),
        );

    frame.render_widget(chart, area);
}

/// `(year, total)` and `(year, principal)` pairs
pub fn series(projection: &Projection) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    projection
        .points
        .iter()
        .map(|p| ((p.year as f64, p.total), (p.year as f64, p.principal)))
        .unzip()
}

fn year_labels(years: u32) -> Vec<Span<'static>> {
    vec![
        Span::raw("0"),
        Span::raw((years / 2).to_string()),
        Span::raw(years.to_string()),
    ]
}

fn value_labels(max_total: f64) -> Vec<Span<'static>> {
    vec![
        Span::raw("0"),
        Span::raw(format_short(max_total / 2.0)),
        Span::raw(format_short(max_total)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectionRequest;
    use crate::services::projection::build_projection;

    #[test]
    fn test_series_follow_points() {
        let projection =
            build_projection(ProjectionRequest::new(16_800_000_000, 10.0, 10)).unwrap();
        let (totals, principals) = series(&projection);

        assert_eq!(totals.len(), 11);
        assert_eq!(principals[10], (10.0, 16_800_000_000.0));
        assert!(totals[10].1 > totals[0].1);
    }

    #[test]
    fn test_value_labels_are_short() {
        let labels = value_labels(16_800_000_000.0);
        assert_eq!(labels[1].content, "8.4B");
        assert_eq!(labels[2].content, "16.8B");
    }
}
