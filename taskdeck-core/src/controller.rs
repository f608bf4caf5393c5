//! Per-task view/edit state machine.
//!
//! Each task row is governed by an [`ItemController`] that is either
//! `Viewing` (static text plus checkbox/edit/delete controls) or
//! `Editing` (field plus Save button, other controls hidden). The blur
//! handling reproduces the pointer-down ordering of the original design:
//! a blur caused by pressing Save is swallowed by the armed flag, and a
//! blur caused by restoring focus after a declined prompt is swallowed
//! by the refocus flag.

use crate::confirm::ConfirmPrompt;
use crate::session::EditSession;
use crate::store::{StoreError, TaskStore};
use crate::task::TaskId;

/// Prompt shown when leaving an edit field with changed text.
///
/// Confirming runs the save; declining keeps editing with the unsaved
/// value. Declining never discards.
pub const SAVE_CHANGES_PROMPT: &str = "Save your changes?";

/// Rendering mode of a task row.
#[derive(Debug)]
pub enum ItemState {
    /// Static text with checkbox/edit/delete controls.
    Viewing,
    /// Editable field with a Save button; other controls hidden.
    Editing(EditSession),
}

/// What a blur event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOutcome {
    /// Artifact blur (armed save or pending refocus); nothing happened.
    Ignored,
    /// The field value was committed; the task is back in view mode.
    Saved,
    /// The user declined the save prompt; focus returns to the field.
    KeptEditing,
    /// The save ran but was rejected for empty input; still editing.
    Rejected,
}

enum BlurDecision {
    Ignore,
    RunSave,
    Prompt,
}

/// State machine for one task row.
#[derive(Debug)]
pub struct ItemController {
    id: TaskId,
    state: ItemState,
}

impl ItemController {
    /// New controller in view mode.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            state: ItemState::Viewing,
        }
    }

    /// The task this controller governs.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ItemState {
        &self.state
    }

    /// Whether the row is in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, ItemState::Editing(_))
    }

    /// The live edit session, if editing.
    #[must_use]
    pub const fn session(&self) -> Option<&EditSession> {
        match &self.state {
            ItemState::Editing(session) => Some(session),
            ItemState::Viewing => None,
        }
    }

    /// Mutable access to the live edit session, if editing.
    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            ItemState::Editing(session) => Some(session),
            ItemState::Viewing => None,
        }
    }

    /// Enters edit mode, snapshotting `current_text` into a fresh
    /// session with the caret at the end. No-op while already editing
    /// (the edit control is hidden then, so the intent is stale).
    pub fn begin_edit(&mut self, current_text: &str) {
        if matches!(self.state, ItemState::Viewing) {
            self.state = ItemState::Editing(EditSession::new(current_text));
        }
    }

    /// Pointer-down on the Save button: the blur that follows before the
    /// click must not trigger the discard prompt.
    pub const fn arm_save(&mut self) {
        if let ItemState::Editing(session) = &mut self.state {
            session.arm();
        }
    }

    /// Save intent (explicit Save click or Enter).
    ///
    /// Commits the trimmed field value and returns to view mode. A
    /// trimmed-empty value is rejected: the session stays live with its
    /// error indicator set and the store untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyInput`] on a rejected empty save (the row
    /// remains in edit mode); [`StoreError::NotFound`] if the task has
    /// vanished from the store.
    pub fn save(&mut self, store: &mut TaskStore) -> Result<(), StoreError> {
        let ItemState::Editing(session) = &mut self.state else {
            return Ok(());
        };
        let trimmed = session.buffer().trim().to_string();
        if trimmed.is_empty() {
            session.flag_input_error();
            return Err(StoreError::EmptyInput);
        }
        store.update_text(self.id, &trimmed)?;
        self.state = ItemState::Viewing;
        Ok(())
    }

    /// Delivers a blur event to an editing row.
    ///
    /// Evaluated in order: armed save swallows the blur; a pending
    /// refocus swallows the blur; an unchanged field saves implicitly;
    /// otherwise the gate decides between saving and keeping the edit.
    pub fn blur(&mut self, store: &mut TaskStore, gate: &mut dyn ConfirmPrompt) -> BlurOutcome {
        let decision = match &mut self.state {
            ItemState::Viewing => return BlurOutcome::Ignored,
            ItemState::Editing(session) => {
                if session.is_armed() {
                    session.disarm();
                    BlurDecision::Ignore
                } else if session.take_refocus_pending() {
                    BlurDecision::Ignore
                } else if session.is_dirty() {
                    BlurDecision::Prompt
                } else {
                    BlurDecision::RunSave
                }
            }
        };

        match decision {
            BlurDecision::Ignore => BlurOutcome::Ignored,
            BlurDecision::RunSave => self.run_save(store),
            BlurDecision::Prompt => {
                if gate.confirm(SAVE_CHANGES_PROMPT) {
                    self.run_save(store)
                } else {
                    if let ItemState::Editing(session) = &mut self.state {
                        session.set_refocus_pending();
                    }
                    BlurOutcome::KeptEditing
                }
            }
        }
    }

    fn run_save(&mut self, store: &mut TaskStore) -> BlurOutcome {
        match self.save(store) {
            Ok(()) => BlurOutcome::Saved,
            Err(_) => BlurOutcome::Rejected,
        }
    }
}
