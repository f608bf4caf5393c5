//! Terminal UI rendering and hit-zone geometry.
//!
//! `draw` renders a frame from the app state; `hit_zones` computes the
//! clickable geometry of that same frame so mouse events can be resolved
//! without re-rendering. Both go through the same layout math.

pub mod counter_bar;
pub mod input_box;
pub mod modal;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};
use taskdeck_core::TaskId;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = split(frame.area());
    counter_bar::render(frame, areas.counters, app);
    task_list::render(frame, areas.list, app);
    input_box::render(frame, areas.input, app);
    status_bar::render(frame, areas.status, app);
}

struct Areas {
    counters: Rect,
    list: Rect,
    input: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Counter bar
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // New-task input
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    Areas {
        counters: chunks[0],
        list: chunks[1],
        input: chunks[2],
        status: chunks[3],
    }
}

/// What a screen position maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The new-task input box.
    Input,
    /// A row's checkbox (task id, row index).
    Checkbox(TaskId, usize),
    /// A row's edit button.
    EditButton(TaskId, usize),
    /// A row's delete button.
    DeleteButton(TaskId, usize),
    /// The Save button of an editing row.
    SaveButton(TaskId),
    /// The editable field of an editing row.
    Field(TaskId),
    /// A row outside its controls.
    Row(TaskId, usize),
    /// The list panel outside any row.
    List,
}

/// Clickable geometry of one rendered frame.
pub struct Zones {
    input: Rect,
    list: Rect,
    rows: Vec<RowZone>,
}

pub(crate) struct RowZone {
    pub(crate) id: TaskId,
    pub(crate) index: usize,
    pub(crate) row: Rect,
    pub(crate) checkbox: Rect,
    pub(crate) controls: RowControls,
}

pub(crate) enum RowControls {
    Viewing { edit: Rect, delete: Rect },
    Editing { field: Rect, save: Rect },
}

/// Computes the clickable zones for the frame rendered into `area`.
#[must_use]
pub fn hit_zones(area: Rect, app: &App) -> Zones {
    let areas = split(area);
    Zones {
        input: areas.input,
        list: areas.list,
        rows: task_list::row_zones(areas.list, app),
    }
}

impl Zones {
    /// Resolves a screen position to its target.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        for zone in &self.rows {
            if !zone.row.contains(pos) {
                continue;
            }
            return Some(match &zone.controls {
                // Checkbox/edit/delete are hidden in edit mode and do
                // not resolve there.
                RowControls::Editing { field, save } => {
                    if save.contains(pos) {
                        HitTarget::SaveButton(zone.id)
                    } else if field.contains(pos) {
                        HitTarget::Field(zone.id)
                    } else {
                        HitTarget::Row(zone.id, zone.index)
                    }
                }
                RowControls::Viewing { edit, delete } => {
                    if zone.checkbox.contains(pos) {
                        HitTarget::Checkbox(zone.id, zone.index)
                    } else if edit.contains(pos) {
                        HitTarget::EditButton(zone.id, zone.index)
                    } else if delete.contains(pos) {
                        HitTarget::DeleteButton(zone.id, zone.index)
                    } else {
                        HitTarget::Row(zone.id, zone.index)
                    }
                }
            });
        }
        if self.input.contains(pos) {
            return Some(HitTarget::Input);
        }
        if self.list.contains(pos) {
            return Some(HitTarget::List);
        }
        None
    }
}
