//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q / Ctrl+C", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab / Shift+Tab", "Move between fields"),
        key_line("s / F5", "Run projection and affirmations"),
        Line::from(""),
        section("Form"),
        Line::from(""),
        key_line("Enter", "Edit field, or press the trigger"),
        key_line("0-9", "Start typing into the focused field"),
        key_line("Up/Down", "Years ±1, rate ±0.1"),
        key_line("Esc", "Cancel edit"),
        Line::from(""),
        section("Affirmations"),
        Line::from(""),
        key_line("j/k", "Scroll one line"),
        key_line("PgUp/PgDn", "Scroll one page"),
        key_line("Home", "Back to the top"),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Green)),
        Span::raw(description),
    ])
}
