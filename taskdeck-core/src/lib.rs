//! Headless task-list domain for `TaskDeck`.
//!
//! Everything a front end needs to run the TODO list without a terminal:
//! the task store with counter bookkeeping, the per-task view/edit state
//! machine, the counter-label projection, the confirmation-gate trait,
//! and the facade that routes user intents. No rendering dependencies;
//! the TUI crate projects this state onto the screen.

pub mod confirm;
pub mod controller;
pub mod display;
pub mod facade;
pub mod session;
pub mod store;
pub mod task;

pub use confirm::ConfirmPrompt;
pub use controller::{BlurOutcome, ItemController, ItemState, SAVE_CHANGES_PROMPT};
pub use display::CounterDisplay;
pub use facade::{DELETE_PROMPT, TodoApp};
pub use session::EditSession;
pub use store::{StoreError, TaskCounters, TaskStore};
pub use task::{Task, TaskId};
