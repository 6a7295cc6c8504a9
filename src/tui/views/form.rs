//! Target form view
//!
//! Amount, years and rate inputs followed by the trigger button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FormField, InputMode};

/// Trigger label when idle
pub const TRIGGER_LABEL: &str = "Kích Hoạt Nguồn Lực & Tính Toán";

/// Trigger label while affirmations are generated
pub const PENDING_LABEL: &str = "Đang Kiến Tạo...";

/// Render the form panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Thiết Lập Mục Tiêu ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Length(1), // Years
            Constraint::Length(1), // Rate
            Constraint::Length(1),
            Constraint::Length(1), // Trigger
            Constraint::Min(0),
        ])
        .split(inner);

    let editing = app.input_mode == InputMode::Editing;
    let field = |f: FormField| (app.focused == f, editing && app.focused == f);

    let (focused, is_editing) = field(FormField::Amount);
    let amount = app
        .amount_input
        .clone()
        .label("Số tiền mục tiêu")
        .placeholder("16,800,000,000")
        .suffix("VND")
        .focused(focused)
        .editing(is_editing);
    frame.render_widget(amount, rows[0]);

    let (focused, is_editing) = field(FormField::Years);
    let years = app
        .years_input
        .clone()
        .label("Thời gian (năm)")
        .focused(focused)
        .editing(is_editing);
    frame.render_widget(years, rows[2]);

    let (focused, is_editing) = field(FormField::Rate);
    let rate = app
        .rate_input
        .clone()
        .label("Lãi suất kép")
        .suffix("%/năm")
        .focused(focused)
        .editing(is_editing);
    frame.render_widget(rate, rows[3]);

    frame.render_widget(trigger(app), rows[5]);
}

fn trigger(app: &App) -> Paragraph<'static> {
    let focused = app.focused == FormField::Trigger;

    let (text, style) = if app.state.is_loading() {
        (
            format!("{} {}", app.spinner(), PENDING_LABEL),
            Style::default().fg(Color::Yellow),
        )
    } else if !app.state.can_submit() {
        (
            format!("[ {} ]", TRIGGER_LABEL),
            Style::default().fg(Color::DarkGray),
        )
    } else if focused {
        (
            format!("[ {} ]", TRIGGER_LABEL),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("[ {} ]", TRIGGER_LABEL),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    };

    let style = if focused && !app.state.can_submit() {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center)
}
