//! Edit Session: transient per-task editing state.

/// Editable-field state for one task in edit mode.
///
/// Owned by the task's controller while it is `Editing` and destroyed
/// when the field returns to view mode (saved or cancelled). The session
/// owns the field buffer; in the rendered UI the field is a projection
/// of this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Text snapshot taken at edit-start, used to detect no-op saves.
    original: String,
    /// Current field value.
    buffer: String,
    /// Caret position as a character index into `buffer`.
    cursor: usize,
    /// Set by pointer-down on the Save button; the next blur is swallowed
    /// so the following Save click is not preempted.
    save_armed: bool,
    /// Set when the user declines the save prompt; the next blur is an
    /// artifact of restoring focus and is swallowed.
    refocus_pending: bool,
    /// Whether the field currently shows the rejected-empty-input
    /// indicator.
    input_error: bool,
}

impl EditSession {
    /// Starts a session over `current` text, caret at the end.
    #[must_use]
    pub fn new(current: &str) -> Self {
        Self {
            original: current.to_string(),
            buffer: current.to_string(),
            cursor: current.chars().count(),
            save_armed: false,
            refocus_pending: false,
            input_error: false,
        }
    }

    /// The text as it was when editing began.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Current field value.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Caret position (character index).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field value differs from the edit-start snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.buffer != self.original
    }

    /// Whether the rejected-empty-input indicator is showing.
    #[must_use]
    pub const fn input_error(&self) -> bool {
        self.input_error
    }

    /// Arms the save button (pointer-down on Save).
    pub const fn arm(&mut self) {
        self.save_armed = true;
    }

    /// Whether the save button is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.save_armed
    }

    pub(crate) const fn disarm(&mut self) {
        self.save_armed = false;
    }

    pub(crate) const fn set_refocus_pending(&mut self) {
        self.refocus_pending = true;
    }

    /// Reads and clears the refocus flag.
    pub(crate) const fn take_refocus_pending(&mut self) -> bool {
        let pending = self.refocus_pending;
        self.refocus_pending = false;
        pending
    }

    pub(crate) const fn flag_input_error(&mut self) {
        self.input_error = true;
    }

    // --- field editing, mirroring the new-task input box ---

    /// Inserts a character at the caret.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
        self.input_error = false;
    }

    /// Deletes the character before the caret.
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.buffer.remove(at);
            self.input_error = false;
        }
    }

    /// Moves the caret one character left.
    pub const fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the caret one character right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the caret to the start of the field.
    pub const fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the caret past the last character.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Byte offset of the caret, for `String` insert/remove.
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.buffer.len())
    }
}
