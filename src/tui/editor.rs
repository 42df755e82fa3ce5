//! Multiline text editor state for the draft pane.
//!
//! A plain line/column cursor over a vector of lines. Every mutation goes
//! through a small set of operations so the parent can recompute derived
//! draft state synchronously after each one.

/// Editor buffer and cursor.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    lines: Vec<String>,
    cursor_row: usize,
    /// Cursor column as a character index into the current line.
    cursor_col: usize,
}

impl EditorState {
    /// Creates an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Creates an editor holding `text`, cursor at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    /// Replaces the buffer and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_line_chars();
    }

    /// The buffer joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Cursor position as (row, character column).
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// The buffer's lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn current_line_chars(&self) -> usize {
        self.lines[self.cursor_row].chars().count()
    }

    /// Byte index of the cursor within the current line.
    fn cursor_byte(&self) -> usize {
        let line = &self.lines[self.cursor_row];
        line.char_indices()
            .nth(self.cursor_col)
            .map_or(line.len(), |(i, _)| i)
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte = self.cursor_byte();
        self.lines[self.cursor_row].insert(byte, c);
        self.cursor_col += 1;
    }

    /// Inserts a string at the cursor (used for paste-like input).
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    /// Splits the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let byte = self.cursor_byte();
        let rest = self.lines[self.cursor_row].split_off(byte);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            let byte = self.cursor_byte();
            self.lines[self.cursor_row].remove(byte);
        } else if self.cursor_row > 0 {
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_chars();
            self.lines[self.cursor_row].push_str(&removed);
        }
    }

    /// Deletes the character under the cursor, joining lines at line end.
    pub fn delete(&mut self) {
        if self.cursor_col < self.current_line_chars() {
            let byte = self.cursor_byte();
            self.lines[self.cursor_row].remove(byte);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    /// Moves the cursor one column left, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_chars();
        }
    }

    /// Moves the cursor one column right, wrapping to the next line start.
    pub fn move_right(&mut self) {
        if self.cursor_col < self.current_line_chars() {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    /// Moves the cursor up one row, clamping the column.
    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.current_line_chars());
        }
    }

    /// Moves the cursor down one row, clamping the column.
    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.current_line_chars());
        }
    }

    /// Moves the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    /// Moves the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor_col = self.current_line_chars();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_text() {
        let mut editor = EditorState::new();
        editor.insert_char('h');
        editor.insert_char('i');
        assert_eq!(editor.text(), "hi");
        assert_eq!(editor.cursor(), (0, 2));
    }

    #[test]
    fn test_newline_splits_line() {
        let mut editor = EditorState::from_text("hello");
        editor.move_home();
        editor.move_right();
        editor.move_right();
        editor.insert_newline();
        assert_eq!(editor.text(), "he\nllo");
        assert_eq!(editor.cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = EditorState::from_text("ab\ncd");
        editor.move_home();
        editor.backspace();
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor(), (0, 2));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut editor = EditorState::from_text("x");
        editor.move_home();
        editor.backspace();
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn test_delete_joins_next_line() {
        let mut editor = EditorState::from_text("ab\ncd");
        editor.move_up();
        editor.move_end();
        editor.delete();
        assert_eq!(editor.text(), "abcd");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut editor = EditorState::new();
        editor.insert_str("héllo 🧠");
        editor.backspace();
        assert_eq!(editor.text(), "héllo ");
        editor.insert_char('→');
        assert_eq!(editor.text(), "héllo →");
    }

    #[test]
    fn test_cursor_clamps_on_vertical_move() {
        let mut editor = EditorState::from_text("long line here\nab");
        // Cursor at end of "ab"
        editor.move_up();
        assert_eq!(editor.cursor(), (0, 2));
        editor.move_end();
        editor.move_down();
        assert_eq!(editor.cursor(), (1, 2));
    }

    #[test]
    fn test_set_text_places_cursor_at_end() {
        let mut editor = EditorState::new();
        editor.set_text("a\nbc");
        assert_eq!(editor.cursor(), (1, 2));
    }

    #[test]
    fn test_insert_str_with_newlines() {
        let mut editor = EditorState::new();
        editor.insert_str("a\nb");
        assert_eq!(editor.text(), "a\nb");
        assert_eq!(editor.cursor(), (1, 1));
    }

    #[test]
    fn test_horizontal_wrap_at_line_ends() {
        let mut editor = EditorState::from_text("a\nb");
        editor.move_home();
        editor.move_left();
        assert_eq!(editor.cursor(), (0, 1));
        editor.move_right();
        assert_eq!(editor.cursor(), (1, 0));
    }
}
