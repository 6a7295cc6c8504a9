//! Summary card view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::{format_multiplier, format_rate};
use crate::models::Vnd;
use crate::tui::app::App;

/// Render the projected total and multiplier
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(projection) = app.state.projection.as_ref() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("Nhập số tiền mục tiêu rồi nhấn Kích Hoạt"),
            Line::from("để xem sức mạnh của lãi kép."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let request = &projection.request;
    let interest = projection.final_total() - request.principal as f64;

    let lines = vec![
        Line::from(Span::styled(
            format!("Tài sản dự kiến sau {} năm", request.years),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            projection.final_amount().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Gấp {} lần vốn gốc", format_multiplier(projection.multiplier())),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Vốn gốc: ", Style::default().fg(Color::Cyan)),
            Span::raw(Vnd::from_dong(request.principal as i64).to_string()),
        ]),
        Line::from(vec![
            Span::styled("Tiền lãi: ", Style::default().fg(Color::Cyan)),
            Span::raw(Vnd::from_f64(interest).to_string()),
            Span::styled(
                format!("  ({}/năm)", format_rate(request.annual_rate_percent)),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
