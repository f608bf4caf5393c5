//! Application state and event handling.
//!
//! `App` wraps the headless core facade with terminal-side state: the
//! new-task input box, panel focus, and list selection. Key and mouse
//! handlers mutate state directly where no confirmation is involved and
//! bubble a [`UiCommand`] to the main loop when an intent needs the
//! modal gate.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use taskdeck_core::{BlurOutcome, ConfirmPrompt, StoreError, TaskId, TodoApp};

use crate::ui::{HitTarget, Zones};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// A gate-requiring intent bubbled to the main loop, which owns the
/// terminal needed to present the modal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Ask for confirmation, then delete.
    ConfirmDelete(TaskId),
    /// Deliver a blur to the editing task (may prompt to save).
    Blur(TaskId),
}

/// Main application state.
pub struct App {
    /// Headless TODO core: store, controllers, counter labels.
    pub todo: TodoApp,
    /// Current new-task input text.
    pub input: String,
    /// Cursor position in the input box (character index).
    pub cursor: usize,
    /// Rejected-empty-input indicator on the input box.
    pub input_error: bool,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an empty application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            todo: TodoApp::new(),
            input: String::new(),
            cursor: 0,
            input_error: false,
            focus: PanelFocus::Input,
            selected: 0,
            should_quit: false,
        }
    }

    /// Handles a key event. Returns a command when the intent needs the
    /// modal gate.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<UiCommand> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        // While a row is in edit mode the field owns the keyboard.
        if let Some(id) = self.todo.editing_task() {
            return self.handle_edit_key(id, key);
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                None
            }
            _ => match self.focus {
                PanelFocus::Input => {
                    self.handle_input_key(key);
                    None
                }
                PanelFocus::List => self.handle_list_key(key),
            },
        }
    }

    /// Handles a mouse event against the current frame geometry.
    pub fn handle_mouse_event(&mut self, event: MouseEvent, zones: &Zones) -> Option<UiCommand> {
        let target = zones.target_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_down(target),
            MouseEventKind::Up(MouseButton::Left) => self.handle_mouse_up(target),
            _ => None,
        }
    }

    /// Runs a gate-requiring command to completion.
    ///
    /// The main loop calls this with the modal prompt; tests pass
    /// closures.
    pub fn dispatch_command(&mut self, cmd: UiCommand, gate: &mut dyn ConfirmPrompt) {
        match cmd {
            UiCommand::ConfirmDelete(id) => match self.todo.delete_todo(id, gate) {
                Ok(true) => {
                    tracing::info!(task = %id, "task deleted");
                    self.clamp_selection();
                }
                Ok(false) => tracing::debug!(task = %id, "delete declined"),
                Err(err) => tracing::warn!(task = %id, error = %err, "delete failed"),
            },
            UiCommand::Blur(id) => {
                let outcome = self.todo.blur_edit(id, gate);
                if outcome == BlurOutcome::KeptEditing {
                    // Declining restores focus to the field; the restore
                    // carries one trailing blur through this pipeline,
                    // consumed here by the one-shot refocus guard.
                    let _ = self.todo.blur_edit(id, gate);
                }
                if outcome == BlurOutcome::Saved {
                    self.focus = PanelFocus::List;
                }
            }
        }
    }

    /// Task id of the selected row.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.todo.tasks().get(self.selected).map(|t| t.id)
    }

    /// Keeps the selection inside the list after a delete.
    pub fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.todo.tasks().len().saturating_sub(1));
    }

    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    // --- edit-mode keys ---

    fn handle_edit_key(&mut self, id: TaskId, key: KeyEvent) -> Option<UiCommand> {
        match key.code {
            KeyCode::Enter => {
                self.save(id);
                None
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => Some(UiCommand::Blur(id)),
            _ => {
                if let Some(session) = self.todo.session_mut(id) {
                    match key.code {
                        KeyCode::Char(c) => session.insert_char(c),
                        KeyCode::Backspace => session.delete_char(),
                        KeyCode::Left => session.move_cursor_left(),
                        KeyCode::Right => session.move_cursor_right(),
                        KeyCode::Home => session.move_cursor_home(),
                        KeyCode::End => session.move_cursor_end(),
                        _ => {}
                    }
                }
                None
            }
        }
    }

    // --- input-box keys ---

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_create(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.input.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            _ => {}
        }
    }

    // --- list keys ---

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<UiCommand> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.todo.tasks().len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.toggle(id);
                }
                None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.edit(id);
                }
                None
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                self.selected_id().map(UiCommand::ConfirmDelete)
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    // --- mouse ---

    fn handle_mouse_down(&mut self, target: Option<HitTarget>) -> Option<UiCommand> {
        // A press only matters while editing: it is what blurs the field.
        let editing = self.todo.editing_task()?;
        match target {
            Some(HitTarget::SaveButton(id)) if id == editing => {
                // Arm before the blur the same press causes, so the blur
                // is swallowed and the release can run the save.
                self.todo.arm_save(editing);
                Some(UiCommand::Blur(editing))
            }
            Some(HitTarget::Field(id)) if id == editing => None,
            _ => Some(UiCommand::Blur(editing)),
        }
    }

    fn handle_mouse_up(&mut self, target: Option<HitTarget>) -> Option<UiCommand> {
        if let Some(editing) = self.todo.editing_task() {
            if let Some(HitTarget::SaveButton(id)) = target {
                if id == editing {
                    self.save(editing);
                }
            }
            return None;
        }

        match target? {
            HitTarget::Input => {
                self.focus = PanelFocus::Input;
                None
            }
            HitTarget::Checkbox(id, index) => {
                self.select_row(index);
                self.toggle(id);
                None
            }
            HitTarget::EditButton(id, index) => {
                self.select_row(index);
                self.edit(id);
                None
            }
            HitTarget::DeleteButton(id, index) => {
                self.select_row(index);
                Some(UiCommand::ConfirmDelete(id))
            }
            HitTarget::Row(_, index) => {
                self.select_row(index);
                None
            }
            HitTarget::List => {
                self.focus = PanelFocus::List;
                None
            }
            // Stale edit-mode zones after the row left edit mode.
            HitTarget::SaveButton(_) | HitTarget::Field(_) => None,
        }
    }

    fn select_row(&mut self, index: usize) {
        self.focus = PanelFocus::List;
        self.selected = index;
    }

    // --- intent helpers ---

    fn submit_create(&mut self) {
        match self.todo.create_todo(&self.input) {
            Ok(id) => {
                tracing::debug!(task = %id, "task created");
                self.input.clear();
                self.cursor = 0;
                self.input_error = false;
            }
            Err(err) => {
                tracing::debug!(error = %err, "create rejected");
                self.input_error = true;
            }
        }
    }

    fn toggle(&mut self, id: TaskId) {
        match self.todo.completed(id) {
            Ok(done) => tracing::debug!(task = %id, done, "task toggled"),
            Err(err) => tracing::warn!(task = %id, error = %err, "toggle failed"),
        }
    }

    fn edit(&mut self, id: TaskId) {
        if let Err(err) = self.todo.edit_todo(id) {
            tracing::warn!(task = %id, error = %err, "edit failed");
        }
    }

    fn save(&mut self, id: TaskId) {
        match self.todo.save_todo(id) {
            Ok(()) => tracing::debug!(task = %id, "task saved"),
            // Rejected empty save: the session shows the error indicator.
            Err(StoreError::EmptyInput) => tracing::debug!(task = %id, "empty save rejected"),
            Err(err) => tracing::warn!(task = %id, error = %err, "save failed"),
        }
    }

    fn enter_char(&mut self, c: char) {
        let at = self.input_byte_index();
        self.input.insert(at, c);
        self.cursor += 1;
        self.input_error = false;
    }

    fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.input_byte_index();
            self.input.remove(at);
            self.input_error = false;
        }
    }

    fn input_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.input.len())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
