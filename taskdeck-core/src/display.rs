//! Counter Display: projection of the store counters into label text.

use crate::store::TaskCounters;

/// Cached label strings for the three task counters.
///
/// The facade calls [`refresh`](Self::refresh) after every mutation that
/// changes counts (create, toggle, delete) and not after text-only
/// edits; rendering draws the cached labels as-is each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterDisplay {
    total: String,
    completed: String,
    incomplete: String,
}

impl CounterDisplay {
    /// Labels for an empty store.
    #[must_use]
    pub fn new() -> Self {
        let mut display = Self {
            total: String::new(),
            completed: String::new(),
            incomplete: String::new(),
        };
        display.refresh(TaskCounters::default());
        display
    }

    /// Re-renders the three labels from `counters`.
    pub fn refresh(&mut self, counters: TaskCounters) {
        self.total = format!("All tasks: {}", counters.total);
        self.completed = format!("Done: {}", counters.completed);
        self.incomplete = format!("Remaining: {}", counters.incomplete);
    }

    /// Label for the total count.
    #[must_use]
    pub fn total_label(&self) -> &str {
        &self.total
    }

    /// Label for the completed count.
    #[must_use]
    pub fn completed_label(&self) -> &str {
        &self.completed
    }

    /// Label for the incomplete count.
    #[must_use]
    pub fn incomplete_label(&self) -> &str {
        &self.incomplete
    }
}

impl Default for CounterDisplay {
    fn default() -> Self {
        Self::new()
    }
}
