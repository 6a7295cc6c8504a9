//! Affirmation list view
//!
//! Cards are wrapped here rather than by the paragraph, so the list height
//! is known exactly and scrolling can stop at the footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::affirmation::{card_number, LIST_FOOTER, LIST_TITLE};
use crate::display::report::{truncate, wrap_words};
use crate::display::GENERATION_ERROR_MESSAGE;
use crate::models::Affirmation;
use crate::state::LoadingState;
use crate::tui::app::App;

/// Indent of the quoted content under each badge
const CONTENT_INDENT: &str = "   ";

/// Render the affirmation panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", LIST_TITLE))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let paragraph = match app.state.loading {
        LoadingState::Idle => Paragraph::new(vec![
            Line::from(""),
            Line::from("100 lời khẳng định sẽ xuất hiện ở đây."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center),
        LoadingState::Pending => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Đang Kiến Tạo...", app.spinner()),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center),
        LoadingState::Failed => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                GENERATION_ERROR_MESSAGE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        LoadingState::Succeeded => {
            let lines = card_lines(&app.state.affirmations, inner.width as usize);
            app.max_scroll = lines.len().saturating_sub(inner.height as usize);
            app.scroll_offset = app.scroll_offset.min(app.max_scroll);
            Paragraph::new(lines).scroll((app.scroll_offset.min(u16::MAX as usize) as u16, 0))
        }
    };

    frame.render_widget(paragraph.block(block), area);
}

/// Lines for the numbered cards wrapped to `width`, ending with the closing quote
pub fn card_lines(affirmations: &[Affirmation], width: usize) -> Vec<Line<'static>> {
    let content_width = width.saturating_sub(CONTENT_INDENT.len()).max(1);
    let mut lines = Vec::with_capacity(affirmations.len() * 4 + 2);

    for (index, item) in affirmations.iter().enumerate() {
        let number = format!("{} ", card_number(index));
        let badge_width = width.saturating_sub(number.chars().count());
        lines.push(Line::from(vec![
            Span::styled(
                number,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                truncate(&item.category.to_uppercase(), badge_width),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        for row in wrap_words(&format!("\"{}\"", item.content), content_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", CONTENT_INDENT, row),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    for row in wrap_words(LIST_FOOTER, width) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(Color::Gray))));
    }
    lines
}
