//! Header view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Motto shown under the title
pub const HEADER_QUOTE: &str = "Cái gì mà tôi không làm bù được chính là tài sản của tôi";

/// One-line description under the title
pub const TAGLINE: &str = "Kiến tạo tư duy thịnh vượng, khẳng định quyền sở hữu và kích hoạt sức mạnh lãi kép cho di sản của bạn.";

/// Render the motto, title and tagline
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", HEADER_QUOTE),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            "Wealth Architect",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
