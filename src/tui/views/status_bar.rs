//! Status bar view
//!
//! Shows the request state, the last message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let (label, color) = match app.state.loading {
        LoadingState::Idle => ("SẴN SÀNG", Color::Gray),
        LoadingState::Pending => ("ĐANG CHỜ", Color::Yellow),
        LoadingState::Succeeded => ("HOÀN TẤT", Color::Green),
        LoadingState::Failed => ("LỖI", Color::Red),
    };
    spans.push(Span::styled(
        format!(" {} ", label),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.settings.model.as_str(),
        Style::default().fg(Color::Cyan),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Editing => " Enter:Apply  Esc:Cancel  Tab:Next ",
        InputMode::Normal => " q:Quit  ?:Help  Tab:Next  Enter:Edit/Run ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
