//! Modal confirmation dialog: the terminal Confirmation Gate.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use taskdeck_core::ConfirmPrompt;

use crate::ui;

/// Blocking yes/no prompt over the whole terminal.
///
/// Constructed by the main loop around its terminal handle whenever a
/// bubbled command needs the gate; the next regular frame repaints the
/// interface after the dialog closes.
pub struct ModalConfirm<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> ModalConfirm<'a, B> {
    /// Wraps the terminal for one prompt exchange.
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> ConfirmPrompt for ModalConfirm<'_, B> {
    /// Suspends the interface behind the dialog until the user answers
    /// `y` or `n`. Every other event is consumed unanswered; the dialog
    /// cannot be dismissed any other way. An I/O failure counts as a
    /// decline so the guarded operation has no side effects.
    fn confirm(&mut self, message: &str) -> bool {
        loop {
            if self
                .terminal
                .draw(|frame| ui::modal::render(frame, message))
                .is_err()
            {
                return false;
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('y' | 'Y') => return true,
                    KeyCode::Char('n' | 'N') => return false,
                    _ => {}
                },
                Ok(_) => {}
                Err(_) => return false,
            }
        }
    }
}
