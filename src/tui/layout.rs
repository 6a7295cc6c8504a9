//! Layout definitions for the TUI
//!
//! Header on top, then the form beside the summary card, the chart beside
//! the affirmation list, and a one-line status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the form column
const FORM_WIDTH: u16 = 46;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and quote
    pub header: Rect,
    /// Target form
    pub form: Rect,
    /// Projected total and multiplier
    pub summary: Rect,
    /// Growth chart
    pub chart: Rect,
    /// Affirmation list
    pub affirmations: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Header
                Constraint::Length(10), // Form and summary
                Constraint::Min(8),     // Chart and affirmations
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
            .split(vertical[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            form: top[0],
            summary: top[1],
            chart: bottom[0],
            affirmations: bottom[1],
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.width, FORM_WIDTH);
        assert_eq!(layout.form.width + layout.summary.width, 120);
        assert_eq!(layout.chart.y, layout.affirmations.y);
        assert_eq!(layout.chart.height, 40 - 4 - 10 - 1);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 70, area);
        assert!(popup.x >= 20 && popup.right() <= 80);
        assert!(popup.y > 0 && popup.bottom() < 50);
    }
}
