//! App Facade: the single entry point for user intents.
//!
//! Event handlers never touch the store or controllers directly; they
//! call the facade, which performs the store mutation, drives the item
//! state machine, and refreshes the counter display when counts change.

use std::collections::HashMap;

use crate::confirm::ConfirmPrompt;
use crate::controller::{BlurOutcome, ItemController};
use crate::display::CounterDisplay;
use crate::session::EditSession;
use crate::store::{StoreError, TaskCounters, TaskStore};
use crate::task::{Task, TaskId};

/// Prompt shown before a task is deleted.
pub const DELETE_PROMPT: &str = "Delete this task?";

/// The TODO application core: store, per-task controllers, counter
/// display. One instance per process; tests instantiate fresh.
#[derive(Debug, Default)]
pub struct TodoApp {
    store: TaskStore,
    controllers: HashMap<TaskId, ItemController>,
    display: CounterDisplay,
}

impl TodoApp {
    /// An empty application.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from the input box value and refreshes counters.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyInput`] if the trimmed text is empty; nothing
    /// changes and the caller shows the input-error indicator.
    pub fn create_todo(&mut self, text: &str) -> Result<TaskId, StoreError> {
        let id = self.store.create(text)?;
        self.controllers.insert(id, ItemController::new(id));
        self.display.refresh(self.store.counters());
        Ok(id)
    }

    /// Toggles a task's completed flag and refreshes counters. Returns
    /// the new flag value.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is stale.
    pub fn completed(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let done = self.store.toggle_completed(id)?;
        self.display.refresh(self.store.counters());
        Ok(done)
    }

    /// Puts a task into edit mode.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is stale.
    pub fn edit_todo(&mut self, id: TaskId) -> Result<(), StoreError> {
        let text = self
            .store
            .get(id)
            .ok_or(StoreError::NotFound(id))?
            .text
            .clone();
        self.controllers
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?
            .begin_edit(&text);
        Ok(())
    }

    /// Pointer-down on a task's Save button.
    pub fn arm_save(&mut self, id: TaskId) {
        if let Some(controller) = self.controllers.get_mut(&id) {
            controller.arm_save();
        }
    }

    /// Save intent for an editing task. Text edits never change counts,
    /// so the counter display is not refreshed here.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyInput`] on a rejected empty save (the task
    /// stays in edit mode); [`StoreError::NotFound`] if the id is stale.
    pub fn save_todo(&mut self, id: TaskId) -> Result<(), StoreError> {
        let controller = self
            .controllers
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        controller.save(&mut self.store)
    }

    /// Delivers a blur event to an editing task.
    pub fn blur_edit(&mut self, id: TaskId, gate: &mut dyn ConfirmPrompt) -> BlurOutcome {
        match self.controllers.get_mut(&id) {
            Some(controller) => controller.blur(&mut self.store, gate),
            None => BlurOutcome::Ignored,
        }
    }

    /// Deletes a task behind the confirmation gate. Returns `false`
    /// (store untouched) when the user declines.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is stale.
    pub fn delete_todo(
        &mut self,
        id: TaskId,
        gate: &mut dyn ConfirmPrompt,
    ) -> Result<bool, StoreError> {
        if !gate.confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        self.store.delete(id)?;
        self.controllers.remove(&id);
        self.display.refresh(self.store.counters());
        Ok(true)
    }

    /// All tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Current counter snapshot.
    #[must_use]
    pub const fn counters(&self) -> TaskCounters {
        self.store.counters()
    }

    /// The cached counter labels.
    #[must_use]
    pub const fn display(&self) -> &CounterDisplay {
        &self.display
    }

    /// Whether the given task is in edit mode.
    #[must_use]
    pub fn is_editing(&self, id: TaskId) -> bool {
        self.controllers.get(&id).is_some_and(ItemController::is_editing)
    }

    /// The task currently in edit mode, if any. The UI routes keys to
    /// one editing row at a time, so in practice this is unique.
    #[must_use]
    pub fn editing_task(&self) -> Option<TaskId> {
        self.controllers
            .values()
            .find(|c| c.is_editing())
            .map(ItemController::id)
    }

    /// The edit session for a task, if it is editing.
    #[must_use]
    pub fn session(&self, id: TaskId) -> Option<&EditSession> {
        self.controllers.get(&id).and_then(ItemController::session)
    }

    /// Mutable edit session access, for routing field keystrokes.
    pub fn session_mut(&mut self, id: TaskId) -> Option<&mut EditSession> {
        self.controllers
            .get_mut(&id)
            .and_then(ItemController::session_mut)
    }
}
