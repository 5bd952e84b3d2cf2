//! Login form state.
//!
//! A single-line text field with a char-indexed cursor. This is the
//! subset of editing operations the username field needs; cursor
//! positions are char indices, converted to display widths only for
//! rendering.

use unicode_width::UnicodeWidthStr;

/// Single-line username field with cursor.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    value: String,
    /// Cursor position in char units.
    cursor: usize,
}

impl LoginFormState {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current field contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in char units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    /// Inserts a string at the cursor. Line breaks are stripped: the
    /// field is single-line, so pasted text is flattened.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| *ch != '\n' && *ch != '\r') {
            self.insert_char(ch);
        }
    }

    /// Deletes the character before the cursor (Backspace semantics).
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clears the field and resets the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Takes the current value, leaving the field empty.
    ///
    /// Used on submit so the field is blank when the login view is
    /// shown again.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Display width of the text before the cursor, for cursor
    /// placement with multi-width characters.
    pub fn cursor_display_width(&self) -> usize {
        let end = self.byte_index(self.cursor);
        self.value[..end].width()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_idx)
            .unwrap_or(self.value.len())
    }
}
