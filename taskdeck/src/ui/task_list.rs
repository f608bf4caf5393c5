//! Task list rendering and row geometry.
//!
//! A row in view mode shows `[ ]`/`[x]`, the task text, and right-aligned
//! `[edit]` `[del]` buttons. A row in edit mode hides those controls and
//! shows the editable field plus a right-aligned `[save]` button. The
//! zone math in [`row_zones`] mirrors this layout column for column.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use taskdeck_core::{EditSession, Task};

use super::{RowControls, RowZone, theme};
use crate::app::{App, PanelFocus};

/// Columns taken by the checkbox: `"[x] "`.
const CHECKBOX_COLS: u16 = 4;
/// Columns reserved on the right in view mode: `" [edit] [del]"`.
const VIEW_CONTROLS_COLS: u16 = 13;
/// Columns reserved on the right in edit mode: `" [save]"`.
const EDIT_CONTROLS_COLS: u16 = 7;

/// Render the task list panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List;
    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    let inner = block.inner(area);
    let offset = scroll_offset(app.selected, inner.height as usize);

    let items: Vec<ListItem> = app
        .todo
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
        .map(|(index, task)| ListItem::new(row_line(app, task, index, inner.width)))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Clickable geometry for the visible rows, matching `render` exactly.
pub(crate) fn row_zones(area: Rect, app: &App) -> Vec<RowZone> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let offset = scroll_offset(app.selected, inner.height as usize);
    let right = inner.x + inner.width;

    app.todo
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
        .map(|(index, task)| {
            let y = inner.y + (index - offset) as u16;
            let controls = if app.todo.is_editing(task.id) {
                RowControls::Editing {
                    field: Rect::new(
                        inner.x + CHECKBOX_COLS.min(inner.width),
                        y,
                        inner.width.saturating_sub(CHECKBOX_COLS + EDIT_CONTROLS_COLS),
                        1,
                    ),
                    save: Rect::new(right.saturating_sub(6), y, 6.min(inner.width), 1),
                }
            } else {
                RowControls::Viewing {
                    edit: Rect::new(right.saturating_sub(12), y, 6.min(inner.width), 1),
                    delete: Rect::new(right.saturating_sub(5), y, 5.min(inner.width), 1),
                }
            };
            RowZone {
                id: task.id,
                index,
                row: Rect::new(inner.x, y, inner.width, 1),
                checkbox: Rect::new(inner.x, y, 3.min(inner.width), 1),
                controls,
            }
        })
        .collect()
}

/// First visible row index, keeping the selection on screen.
const fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 || selected < height {
        0
    } else {
        selected + 1 - height
    }
}

fn row_line(app: &App, task: &Task, index: usize, width: u16) -> Line<'static> {
    app.todo.session(task.id).map_or_else(
        || view_line(app, task, index, width),
        |session| edit_line(session, width),
    )
}

fn view_line(app: &App, task: &Task, index: usize, width: u16) -> Line<'static> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let text_width = width.saturating_sub(CHECKBOX_COLS + VIEW_CONTROLS_COLS) as usize;
    let text = clip(&task.text, text_width);
    let pad = " ".repeat(text_width.saturating_sub(text.chars().count()));

    let is_selected = index == app.selected && app.focus == PanelFocus::List;
    let text_style = if is_selected {
        theme::selected()
    } else if task.completed {
        theme::completed()
    } else {
        theme::normal()
    };

    Line::from(vec![
        Span::styled(checkbox.to_string(), theme::normal()),
        Span::styled(text, text_style),
        Span::raw(pad),
        Span::raw(" "),
        Span::styled("[edit]", theme::button()),
        Span::raw(" "),
        Span::styled("[del]", theme::delete_button()),
    ])
}

fn edit_line(session: &EditSession, width: u16) -> Line<'static> {
    let field_width = width.saturating_sub(CHECKBOX_COLS + EDIT_CONTROLS_COLS) as usize;
    let display = clip_tail(&with_cursor(session), field_width);
    let pad = " ".repeat(field_width.saturating_sub(display.chars().count()));

    let field_style = if session.input_error() {
        theme::input_error()
    } else {
        theme::normal()
    };

    Line::from(vec![
        // Checkbox and buttons are hidden while editing.
        Span::raw("    "),
        Span::styled(display, field_style),
        Span::raw(pad),
        Span::raw(" "),
        Span::styled("[save]", theme::save_button()),
    ])
}

/// The field value with the cursor block inserted at the caret.
fn with_cursor(session: &EditSession) -> String {
    let mut display = session.buffer().to_string();
    let at = display
        .char_indices()
        .map(|(i, _)| i)
        .nth(session.cursor())
        .unwrap_or(display.len());
    display.insert(at, '\u{2588}');
    display
}

/// Clip to `width` characters, marking truncation.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('\u{2026}');
        clipped
    }
}

/// Keep the tail so the caret stays visible in long fields.
fn clip_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        text.to_string()
    } else {
        text.chars().skip(count - width).collect()
    }
}
