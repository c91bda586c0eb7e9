//! Value entry: a one-line text buffer for typing a number into a field.

use super::layout::Field;

/// Maximum characters accepted in the buffer.
const MAX_LEN: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct FieldEntry {
    target: Option<Field>,
    buffer: String,
}

impl FieldEntry {
    /// Begin editing `field` with `initial` already typed.
    pub fn begin(&mut self, field: Field, initial: &str) {
        self.target = Some(field);
        self.buffer = initial.chars().take(MAX_LEN).collect();
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Field being edited, if any.
    pub fn target(&self) -> Option<Field> {
        self.target
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn insert(&mut self, c: char) {
        if self.is_active() && self.buffer.chars().count() < MAX_LEN {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Abandon the edit.
    pub fn cancel(&mut self) {
        self.target = None;
        self.buffer.clear();
    }

    /// Finish the edit, returning the field and the typed text.
    pub fn take(&mut self) -> Option<(Field, String)> {
        let field = self.target.take()?;
        Some((field, std::mem::take(&mut self.buffer)))
    }
}
