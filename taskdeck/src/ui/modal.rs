//! Confirmation dialog rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme;

/// Render the modal yes/no dialog. The dialog owns the whole frame: the
/// interface behind it is suspended until the prompt is answered.
pub fn render(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 6).max(24).min(area.width);
    let dialog = centered(area, width, 5);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title("Confirm")
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    let body = vec![
        Line::from(Span::styled(message.to_string(), theme::normal())),
        Line::raw(""),
        Line::from(Span::styled("[y]es   [n]o", theme::bold())),
    ];

    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, dialog);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
