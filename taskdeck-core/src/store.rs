//! Task Store: the ordered task collection and its counters.
//!
//! The store is the single owner of all task data. Every mutation keeps
//! the counter invariant `total == completed + incomplete == tasks.len()`
//! and is checked by a debug assertion before returning.

use thiserror::Error;

use crate::task::{Task, TaskId};

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Task text was empty or whitespace-only.
    #[error("task text cannot be empty")]
    EmptyInput,
    /// Task with the given id is not in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Running counts over the task collection.
///
/// Derived aggregate state: the store keeps it consistent with the task
/// list, callers never mutate it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounters {
    /// Number of tasks in the store.
    pub total: usize,
    /// Number of tasks marked complete.
    pub completed: usize,
    /// Number of tasks not yet complete.
    pub incomplete: usize,
}

/// Ordered task collection with counter bookkeeping.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: u64,
    counters: TaskCounters,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from `text`, trimmed, appended at the end of the
    /// list with `completed = false`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyInput`] if the trimmed text is empty;
    /// the store is left unchanged.
    pub fn create(&mut self, text: &str) -> Result<TaskId, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        self.last_id += 1;
        let id = TaskId::new(self.last_id);
        self.tasks.push(Task {
            id,
            text: trimmed.to_string(),
            completed: false,
        });
        self.counters.total += 1;
        self.counters.incomplete += 1;
        self.check_invariants();
        Ok(id)
    }

    /// Flips the `completed` flag and moves one count between the
    /// completed/incomplete buckets. Returns the new flag value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let done = {
            let task = self.task_mut(id)?;
            task.completed = !task.completed;
            task.completed
        };
        if done {
            self.counters.completed += 1;
            self.counters.incomplete -= 1;
        } else {
            self.counters.completed -= 1;
            self.counters.incomplete += 1;
        }
        self.check_invariants();
        Ok(done)
    }

    /// Replaces a task's text with the trimmed value. No counter effect.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyInput`] if the trimmed text is empty,
    /// or [`StoreError::NotFound`] if the id is absent. The store is
    /// unchanged on error.
    pub fn update_text(&mut self, id: TaskId, new_text: &str) -> Result<(), StoreError> {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyInput);
        }
        self.task_mut(id)?.text = trimmed.to_string();
        self.check_invariants();
        Ok(())
    }

    /// Removes a task and decrements `total` plus whichever bucket
    /// matches its state. Returns the removed task.
    ///
    /// Confirmation is the facade's responsibility; the store itself
    /// never prompts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let task = self.tasks.remove(index);
        self.counters.total -= 1;
        if task.completed {
            self.counters.completed -= 1;
        } else {
            self.counters.incomplete -= 1;
        }
        self.check_invariants();
        Ok(task)
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current counter snapshot.
    #[must_use]
    pub const fn counters(&self) -> TaskCounters {
        self.counters
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.counters.total,
            self.counters.completed + self.counters.incomplete
        );
        debug_assert_eq!(self.counters.total, self.tasks.len());
    }
}
