/// Multi-line text buffer behind the deck editor popup. `cursor` is a byte
/// offset that always sits on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeckEditor {
    pub text: String,
    pub cursor: usize,
    pub scroll_y: u16,
}

impl DeckEditor {
    pub fn open(text: String) -> Self {
        let cursor = text.len();
        Self {
            text,
            cursor,
            scroll_y: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Moves to the same column on the previous line, or the end of that
    /// line when it is shorter.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, start - 1, column);
    }

    pub fn move_down(&mut self) {
        let Some(newline) = self.text[self.cursor..].find('\n') else {
            return;
        };
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        let next_start = self.cursor + newline + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map(|i| next_start + i)
            .unwrap_or(self.text.len());
        self.cursor = self.offset_in_line(next_start, next_end, column);
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    // Byte offset of char `column` within the line [start, end), clamped to end.
    fn offset_in_line(&self, start: usize, end: usize, column: usize) -> usize {
        self.text[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_puts_cursor_at_end() {
        let editor = DeckEditor::open("cat,feline".to_string());
        assert_eq!(editor.cursor, 10);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut editor = DeckEditor::default();
        for c in "dog,canine".chars() {
            editor.insert_char(c);
        }
        editor.newline();
        editor.insert_char('x');
        assert_eq!(editor.text, "dog,canine\nx");

        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text, "dog,canine");
        assert_eq!(editor.cursor, editor.text.len());
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut editor = DeckEditor::open("ab".to_string());
        editor.cursor = 0;
        editor.backspace();
        assert_eq!(editor.text, "ab");
        assert_eq!(editor.cursor, 0);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut editor = DeckEditor::open("ct".to_string());
        editor.move_left();
        editor.insert_char('a');
        assert_eq!(editor.text, "cat");
        assert_eq!(editor.cursor, 2);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut editor = DeckEditor::open("cześć".to_string());
        editor.move_left();
        assert_eq!(&editor.text[editor.cursor..], "ć");
        editor.backspace();
        assert_eq!(editor.text, "czeć");
        editor.move_right();
        assert_eq!(editor.cursor, editor.text.len());
        editor.move_right();
        assert_eq!(editor.cursor, editor.text.len());
    }

    #[test]
    fn test_delete_forward() {
        let mut editor = DeckEditor::open("abc".to_string());
        editor.cursor = 1;
        editor.delete();
        assert_eq!(editor.text, "ac");
        editor.cursor = 2;
        editor.delete();
        assert_eq!(editor.text, "ac");
    }

    #[test]
    fn test_line_start_and_end() {
        let mut editor = DeckEditor::open("a,1\nbb,2\nc,3".to_string());
        editor.cursor = 6;
        editor.move_line_start();
        assert_eq!(editor.cursor, 4);
        editor.move_line_end();
        assert_eq!(editor.cursor, 8);
    }

    #[test]
    fn test_move_up_and_down_keep_column() {
        let mut editor = DeckEditor::open("a,1\nbb,2\nc,3".to_string());
        editor.cursor = 6;
        editor.move_up();
        assert_eq!(editor.cursor, 2);
        editor.move_up();
        assert_eq!(editor.cursor, 2);

        editor.move_down();
        assert_eq!(editor.cursor, 6);
        editor.move_down();
        assert_eq!(editor.cursor, 11);
        editor.move_down();
        assert_eq!(editor.cursor, 11);
    }

    #[test]
    fn test_vertical_move_clamps_to_short_line() {
        let mut editor = DeckEditor::open("abcdef\nx".to_string());
        editor.cursor = 6;
        editor.move_down();
        assert_eq!(editor.cursor, editor.text.len());
        editor.move_up();
        assert_eq!(editor.cursor, 1);
    }

    #[test]
    fn test_vertical_move_lands_on_char_boundary() {
        let mut editor = DeckEditor::open("ab\nżółw".to_string());
        editor.cursor = 2;
        editor.move_down();
        assert_eq!(&editor.text[editor.cursor..], "łw");
        editor.move_up();
        assert_eq!(editor.cursor, 2);
    }
}
