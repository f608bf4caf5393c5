//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Completed-count indicator color.
pub const SUCCESS: Color = Color::Green;

/// Remaining-count indicator color.
pub const WARNING: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR: Color = Color::Red;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected row style.
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Completed task text: struck through and dimmed.
#[must_use]
pub fn completed() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Edit/save button labels.
#[must_use]
pub fn button() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Delete button label.
#[must_use]
pub fn delete_button() -> Style {
    Style::default().fg(ERROR)
}

/// Save button label.
#[must_use]
pub fn save_button() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

/// Rejected-empty-input indicator: the terminal stand-in for the
/// shake/flash is a blinking red field.
#[must_use]
pub fn input_error() -> Style {
    Style::default()
        .fg(ERROR)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
}

/// Style for the counter and status bars.
#[must_use]
pub fn bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}
