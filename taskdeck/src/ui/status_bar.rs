//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.todo.editing_task().is_some() {
        "Enter: save | Esc/Tab: leave field | y/n answer prompts"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add task | Tab: switch panel | Esc: quit",
            PanelFocus::List => {
                "Space: toggle | e/Enter: edit | d: delete | \u{2191}\u{2193}/jk: move | q: quit"
            }
        }
    };

    let status_line = Line::from(vec![
        Span::styled("TaskDeck v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::bar_bg());
    frame.render_widget(paragraph, area);
}
