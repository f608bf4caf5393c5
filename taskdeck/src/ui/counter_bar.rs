//! Counter bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render the three counter labels across the top of the screen.
///
/// The labels come straight from the cached `CounterDisplay`; they are
/// only recomputed when a mutation changes the counts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let display = app.todo.display();
    let line = Line::from(vec![
        Span::styled(display.total_label(), theme::bold()),
        Span::raw(" | "),
        Span::styled(display.completed_label(), theme::normal().fg(theme::SUCCESS)),
        Span::raw(" | "),
        Span::styled(
            display.incomplete_label(),
            theme::normal().fg(theme::WARNING),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(theme::bar_bg());
    frame.render_widget(paragraph, area);
}
