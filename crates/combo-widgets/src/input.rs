#![forbid(unsafe_code)]

//! Editable input line.
//!
//! Single-line text with a caret and an optional selection, grapheme-cluster
//! aware. The combobox uses the selection to hold the autocompleted tail of a
//! type-ahead match, so the next keystroke replaces it and Backspace removes
//! it.

use combo_core::event::{KeyCode, KeyEvent};
use unicode_segmentation::UnicodeSegmentation;

/// What a keystroke did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// Text was inserted (possibly replacing a selection).
    Inserted,
    /// Text was removed.
    Deleted,
    /// Only the caret or selection moved.
    Moved,
    /// The key is not an editing key, or had no effect.
    Unchanged,
}

impl InputChange {
    /// Whether the text itself changed.
    pub const fn is_edit(self) -> bool {
        matches!(self, Self::Inserted | Self::Deleted)
    }
}

/// A single-line editable text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    /// Text value.
    value: String,
    /// Caret position (grapheme index).
    cursor: usize,
    /// Selection anchor (grapheme index). When set, selection spans from anchor to cursor.
    selection_anchor: Option<usize>,
}

impl InputLine {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial text (builder). The caret goes to the end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position (grapheme index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text, caret at the end, selection cleared.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self.selection_anchor = None;
    }

    /// Replace the text with `full` and select everything after the first
    /// `typed` graphemes.
    pub fn complete_with(&mut self, full: &str, typed: usize) {
        self.value = full.to_owned();
        let end = self.grapheme_count();
        self.cursor = end;
        let start = typed.min(end);
        self.selection_anchor = (start < end).then_some(start);
    }

    /// Selected grapheme range `(start, end)`, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection_anchor.map(|anchor| self.selection_range(anchor))
    }

    /// Selected text, if any.
    pub fn selected_text(&self) -> Option<&str> {
        let (start, end) = self.selection()?;
        let byte_start = self.grapheme_byte_offset(start);
        let byte_end = self.grapheme_byte_offset(end);
        Some(&self.value[byte_start..byte_end])
    }

    /// Text left of the caret.
    pub fn before_caret(&self) -> &str {
        &self.value[..self.grapheme_byte_offset(self.cursor)]
    }

    /// Whether nothing follows the caret.
    pub fn caret_at_end(&self) -> bool {
        self.cursor >= self.grapheme_count()
    }

    // --- Event handling ---

    /// Apply an editing or caret key.
    pub fn handle_key(&mut self, key: &KeyEvent) -> InputChange {
        let ctrl = key.ctrl();
        match key.code {
            KeyCode::Char(c) if !ctrl && !key.alt() => {
                self.delete_selection();
                self.insert_char(c);
                InputChange::Inserted
            }
            KeyCode::Backspace => {
                let before = self.value.len();
                if self.selection_anchor.is_some() {
                    self.delete_selection();
                } else if ctrl {
                    self.delete_word_back();
                } else {
                    self.delete_char_back();
                }
                self.deleted_since(before)
            }
            KeyCode::Delete => {
                let before = self.value.len();
                if self.selection_anchor.is_some() {
                    self.delete_selection();
                } else {
                    self.delete_char_forward();
                }
                self.deleted_since(before)
            }
            KeyCode::Left => {
                self.move_cursor_left();
                InputChange::Moved
            }
            KeyCode::Right => {
                self.move_cursor_right();
                InputChange::Moved
            }
            KeyCode::Home => {
                self.selection_anchor = None;
                self.cursor = 0;
                InputChange::Moved
            }
            KeyCode::End => {
                self.selection_anchor = None;
                self.cursor = self.grapheme_count();
                InputChange::Moved
            }
            _ => InputChange::Unchanged,
        }
    }

    /// Insert a run of text at the caret, replacing any selection.
    /// Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) -> InputChange {
        if text.is_empty() {
            return InputChange::Unchanged;
        }
        self.delete_selection();
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, &cleaned);
        self.cursor += cleaned.graphemes(true).count();
        InputChange::Inserted
    }

    // --- Editing operations ---

    fn deleted_since(&self, before: usize) -> InputChange {
        if self.value.len() < before {
            InputChange::Deleted
        } else {
            InputChange::Unchanged
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        // A combining mark joins the previous cluster instead of adding one.
        self.cursor = self.value[..byte_offset + c.len_utf8()]
            .graphemes(true)
            .count();
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let byte_start = self.grapheme_byte_offset(self.cursor - 1);
            let byte_end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        let count = self.grapheme_count();
        if self.cursor < count {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(byte_start..byte_end);
        }
    }

    fn delete_word_back(&mut self) {
        let old_cursor = self.cursor;
        self.move_cursor_word_left();
        let new_cursor = self.cursor;
        if new_cursor < old_cursor {
            let byte_start = self.grapheme_byte_offset(new_cursor);
            let byte_end = self.grapheme_byte_offset(old_cursor);
            self.value.drain(byte_start..byte_end);
        }
    }

    /// Delete selected text. No-op if no selection.
    fn delete_selection(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            let (start, end) = self.selection_range(anchor);
            let byte_start = self.grapheme_byte_offset(start);
            let byte_end = self.grapheme_byte_offset(end);
            self.value.drain(byte_start..byte_end);
            self.cursor = start;
        }
    }

    fn selection_range(&self, anchor: usize) -> (usize, usize) {
        if anchor <= self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        }
    }

    // --- Cursor movement ---

    fn move_cursor_left(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            self.cursor = self.cursor.min(anchor);
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            self.cursor = self.cursor.max(anchor);
        } else if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    fn move_cursor_word_left(&mut self) {
        self.selection_anchor = None;

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;

        if pos == 0 {
            return;
        }

        // 0=Space, 1=AlphaNum, 2=Punct
        let class = |g: &str| {
            if g.chars().all(char::is_whitespace) {
                0
            } else if g.chars().any(char::is_alphanumeric) {
                1
            } else {
                2
            }
        };

        // Trailing spaces go together with the word before them.
        while pos > 0 && class(graphemes[pos - 1]) == 0 {
            pos -= 1;
        }
        if pos > 0 {
            let target_class = class(graphemes[pos - 1]);
            while pos > 0 && class(graphemes[pos - 1]) == target_class {
                pos -= 1;
            }
        }

        self.cursor = pos;
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combo_core::event::Modifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn type_str(line: &mut InputLine, s: &str) {
        for c in s.chars() {
            line.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_line() {
        let line = InputLine::new();
        assert!(line.value().is_empty());
        assert_eq!(line.cursor(), 0);
        assert!(line.selected_text().is_none());
        assert!(line.caret_at_end());
    }

    #[test]
    fn with_value_puts_caret_at_end() {
        let line = InputLine::new().with_value("Michigan");
        assert_eq!(line.value(), "Michigan");
        assert_eq!(line.cursor(), 8);
        assert_eq!(line.before_caret(), "Michigan");
    }

    #[test]
    fn typing_inserts() {
        let mut line = InputLine::new();
        type_str(&mut line, "Flo");
        assert_eq!(line.value(), "Flo");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn complete_with_selects_tail() {
        let mut line = InputLine::new().with_value("Flor");
        line.complete_with("Florida", 4);
        assert_eq!(line.value(), "Florida");
        assert_eq!(line.selection(), Some((4, 7)));
        assert_eq!(line.selected_text(), Some("ida"));
    }

    #[test]
    fn complete_with_nothing_missing_has_no_selection() {
        let mut line = InputLine::new();
        line.complete_with("Ohio", 4);
        assert_eq!(line.selection(), None);
        assert!(line.caret_at_end());
    }

    #[test]
    fn backspace_removes_autocompleted_tail() {
        let mut line = InputLine::new();
        line.complete_with("Florida", 4);
        let change = line.handle_key(&key(KeyCode::Backspace));
        assert_eq!(change, InputChange::Deleted);
        assert_eq!(line.value(), "Flor");
        assert!(line.selection().is_none());
    }

    #[test]
    fn typing_replaces_autocompleted_tail() {
        let mut line = InputLine::new();
        line.complete_with("Florida", 1);
        line.handle_key(&key(KeyCode::Char('l')));
        assert_eq!(line.value(), "Fl");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_unchanged() {
        let mut line = InputLine::new();
        assert_eq!(
            line.handle_key(&key(KeyCode::Backspace)),
            InputChange::Unchanged
        );
    }

    #[test]
    fn delete_forward() {
        let mut line = InputLine::new().with_value("Ohio");
        line.handle_key(&key(KeyCode::Home));
        assert_eq!(line.handle_key(&key(KeyCode::Delete)), InputChange::Deleted);
        assert_eq!(line.value(), "hio");
        assert_eq!(
            InputLine::new().handle_key(&key(KeyCode::Delete)),
            InputChange::Unchanged
        );
    }

    #[test]
    fn ctrl_backspace_deletes_word() {
        let mut line = InputLine::new().with_value("New Mexico  ");
        let ctrl_bs = key(KeyCode::Backspace).with_modifiers(Modifiers::CTRL);
        assert_eq!(line.handle_key(&ctrl_bs), InputChange::Deleted);
        assert_eq!(line.value(), "New ");
    }

    #[test]
    fn ctrl_char_is_not_inserted() {
        let mut line = InputLine::new();
        let ctrl_a = key(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL);
        assert_eq!(line.handle_key(&ctrl_a), InputChange::Unchanged);
        assert!(line.value().is_empty());
    }

    #[test]
    fn left_collapses_selection_to_start() {
        let mut line = InputLine::new();
        line.complete_with("Florida", 4);
        assert_eq!(line.handle_key(&key(KeyCode::Left)), InputChange::Moved);
        assert_eq!(line.cursor(), 4);
        assert!(line.selection().is_none());
        assert!(!line.caret_at_end());
        assert_eq!(line.before_caret(), "Flor");
    }

    #[test]
    fn insert_in_middle() {
        let mut line = InputLine::new().with_value("Miouri");
        for _ in 0..4 {
            line.handle_key(&key(KeyCode::Left));
        }
        type_str(&mut line, "ss");
        assert_eq!(line.value(), "Missouri");
        assert_eq!(line.cursor(), 4);
    }

    #[test]
    fn insert_str_flattens_newlines() {
        let mut line = InputLine::new();
        assert_eq!(line.insert_str("New\nYork"), InputChange::Inserted);
        assert_eq!(line.value(), "New York");
        assert_eq!(line.insert_str(""), InputChange::Unchanged);
    }

    #[test]
    fn grapheme_aware_backspace() {
        let mut line = InputLine::new().with_value("Cafe\u{301}");
        assert_eq!(line.cursor(), 4);
        line.handle_key(&key(KeyCode::Backspace));
        assert_eq!(line.value(), "Caf");
    }

    #[test]
    fn combining_mark_joins_cluster() {
        let mut line = InputLine::new();
        type_str(&mut line, "e\u{301}");
        assert_eq!(line.cursor(), 1);
    }
}
