//! UTF-8 safe editing buffer for the band's text region.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBufferState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextBufferState {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }
    /// Text left of the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.input[..self.cursor]
    }

    // ----- Setters -----
    /// Replace the buffer and park the cursor at the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    // ----- Editing primitives -----
    pub fn move_left(&mut self) {
        if let Some(prev) = self.before_cursor().chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.before_cursor().chars().next_back() else {
            return false;
        };
        let start = self.cursor - prev.len_utf8();
        self.input.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.input[self.cursor..].chars().next() else {
            return false;
        };
        let end = self.cursor + next.len_utf8();
        self.input.drain(self.cursor..end);
        true
    }
}
