//! `TaskDeck` — terminal-native TODO list library.

pub mod app;
pub mod config;
pub mod confirm;
pub mod ui;
