//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the input box for creating tasks.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && app.todo.editing_task().is_none();

    // Build the input text with cursor
    let mut display_text = app.input.clone();
    if is_focused {
        let at = display_text
            .char_indices()
            .map(|(i, _)| i)
            .nth(app.cursor)
            .unwrap_or(display_text.len());
        display_text.insert(at, '\u{2588}');
    }

    let input_line = if display_text.is_empty() && !is_focused {
        Line::from(Span::styled("Add a task...", theme::dimmed()))
    } else if app.input_error {
        Line::from(Span::styled(display_text, theme::input_error()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let (title, border_style) = if app.input_error {
        ("New task (cannot be empty)", theme::input_error())
    } else if is_focused {
        ("New task", theme::highlighted())
    } else {
        ("New task", theme::normal())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(input_line).block(block);
    frame.render_widget(paragraph, area);
}
