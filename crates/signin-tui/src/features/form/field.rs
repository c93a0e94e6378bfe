//! Single-line field editing.
//!
//! The form controller owns field values; this module only tracks where the
//! cursor sits and computes the next value for an edit. Every edit that
//! changes text returns the full new string, which the reducer hands to the
//! controller setter (the `onChange` contract).
//!
//! Cursor positions are grapheme indices so that combined characters and
//! emoji move and delete as one unit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

/// Result of feeding a key to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The value changed; carries the full new value.
    Changed(String),
    /// Only the cursor moved.
    Moved,
    /// The key is not an editing key.
    Ignored,
}

/// Cursor over a field value, in grapheme units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCursor {
    pos: usize,
}

impl FieldCursor {
    /// Returns the cursor position clamped to `value`.
    pub fn position(self, value: &str) -> usize {
        self.pos.min(grapheme_len(value))
    }

    pub fn move_to_end(&mut self, value: &str) {
        self.pos = grapheme_len(value);
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Inserts text at the cursor. Line breaks and other control characters
    /// are dropped since fields are single-line.
    pub fn insert_str(&mut self, value: &str, text: &str) -> FieldOutcome {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return FieldOutcome::Ignored;
        }

        let byte_idx = byte_offset(value, self.position(value));
        let mut prefix = String::with_capacity(value.len() + clean.len());
        prefix.push_str(&value[..byte_idx]);
        prefix.push_str(&clean);
        self.pos = grapheme_len(&prefix);

        prefix.push_str(&value[byte_idx..]);
        FieldOutcome::Changed(prefix)
    }

    /// Applies an editing key to `value`.
    pub fn handle_key(&mut self, value: &str, key: KeyEvent) -> FieldOutcome {
        if matches!(key.kind, KeyEventKind::Release) {
            return FieldOutcome::Ignored;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('a') if ctrl => self.move_within(value, 0),
            KeyCode::Char('e') if ctrl => self.move_within(value, grapheme_len(value)),
            KeyCode::Char('w') if ctrl => self.delete_word_left(value),
            KeyCode::Char('u') if ctrl => self.delete_to_start(value),
            KeyCode::Char('k') if ctrl => self.delete_to_end(value),
            KeyCode::Char(ch) if !ctrl && !alt => {
                let mut buf = [0u8; 4];
                self.insert_str(value, ch.encode_utf8(&mut buf))
            }
            KeyCode::Backspace if ctrl || alt => self.delete_word_left(value),
            KeyCode::Backspace => self.delete_prev(value),
            KeyCode::Delete => self.delete_next(value),
            KeyCode::Left if ctrl || alt => {
                let target = word_left_target(value, self.position(value));
                self.move_within(value, target)
            }
            KeyCode::Right if ctrl || alt => {
                let target = word_right_target(value, self.position(value));
                self.move_within(value, target)
            }
            KeyCode::Left => {
                let pos = self.position(value);
                self.move_within(value, pos.saturating_sub(1))
            }
            KeyCode::Right => {
                let pos = self.position(value);
                self.move_within(value, pos + 1)
            }
            KeyCode::Home => self.move_within(value, 0),
            KeyCode::End => self.move_within(value, grapheme_len(value)),
            _ => FieldOutcome::Ignored,
        }
    }

    fn move_within(&mut self, value: &str, target: usize) -> FieldOutcome {
        self.pos = target.min(grapheme_len(value));
        FieldOutcome::Moved
    }

    fn delete_prev(&mut self, value: &str) -> FieldOutcome {
        let pos = self.position(value);
        if pos == 0 {
            self.pos = 0;
            return FieldOutcome::Moved;
        }
        self.delete_range(value, pos - 1, pos)
    }

    fn delete_next(&mut self, value: &str) -> FieldOutcome {
        let pos = self.position(value);
        if pos >= grapheme_len(value) {
            self.pos = pos;
            return FieldOutcome::Moved;
        }
        self.delete_range(value, pos, pos + 1)
    }

    fn delete_word_left(&mut self, value: &str) -> FieldOutcome {
        let pos = self.position(value);
        let start = word_left_target(value, pos);
        self.delete_range(value, start, pos)
    }

    fn delete_to_start(&mut self, value: &str) -> FieldOutcome {
        let pos = self.position(value);
        self.delete_range(value, 0, pos)
    }

    fn delete_to_end(&mut self, value: &str) -> FieldOutcome {
        let pos = self.position(value);
        self.delete_range(value, pos, grapheme_len(value))
    }

    /// Removes graphemes `start..end` and leaves the cursor at `start`.
    fn delete_range(&mut self, value: &str, start: usize, end: usize) -> FieldOutcome {
        self.pos = start;
        if start >= end {
            return FieldOutcome::Moved;
        }
        let start_byte = byte_offset(value, start);
        let end_byte = byte_offset(value, end);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start_byte]);
        next.push_str(&value[end_byte..]);
        FieldOutcome::Changed(next)
    }
}

pub(crate) fn grapheme_len(value: &str) -> usize {
    value.graphemes(true).count()
}

fn byte_offset(value: &str, grapheme_idx: usize) -> usize {
    value
        .grapheme_indices(true)
        .nth(grapheme_idx)
        .map_or(value.len(), |(i, _)| i)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

/// Classifies a grapheme by its first char. Word chars are alphanumerics and
/// underscore; anything else that is not whitespace is punctuation.
fn char_class(grapheme: &str) -> CharClass {
    match grapheme.chars().next() {
        Some(c) if c.is_whitespace() => CharClass::Whitespace,
        Some(c) if c.is_alphanumeric() || c == '_' => CharClass::Word,
        _ => CharClass::Punct,
    }
}

fn word_left_target(value: &str, pos: usize) -> usize {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    let mut idx = pos.min(graphemes.len());
    if idx == 0 {
        return 0;
    }
    let class = char_class(graphemes[idx - 1]);
    while idx > 0 && char_class(graphemes[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn word_right_target(value: &str, pos: usize) -> usize {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    let mut idx = pos.min(graphemes.len());
    if idx >= graphemes.len() {
        return idx;
    }
    let class = char_class(graphemes[idx]);
    while idx < graphemes.len() && char_class(graphemes[idx]) == class {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Feeds keys through a cursor, threading the value like the reducer does.
    fn type_keys(value: &str, cursor: &mut FieldCursor, keys: &[KeyEvent]) -> String {
        let mut value = value.to_string();
        for k in keys {
            if let FieldOutcome::Changed(next) = cursor.handle_key(&value, *k) {
                value = next;
            }
        }
        value
    }

    #[test]
    fn test_typing_appends_and_advances() {
        let mut cursor = FieldCursor::default();
        let value = type_keys(
            "",
            &mut cursor,
            &[key(KeyCode::Char('h')), key(KeyCode::Char('i'))],
        );
        assert_eq!(value, "hi");
        assert_eq!(cursor.position(&value), 2);
    }

    #[test]
    fn test_insert_in_middle_after_moving_left() {
        let mut cursor = FieldCursor::default();
        cursor.move_to_end("ac");
        let value = type_keys(
            "ac",
            &mut cursor,
            &[key(KeyCode::Left), key(KeyCode::Char('b'))],
        );
        assert_eq!(value, "abc");
        assert_eq!(cursor.position(&value), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut cursor = FieldCursor::default();
        assert_eq!(
            cursor.handle_key("abc", key(KeyCode::Backspace)),
            FieldOutcome::Moved
        );
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        // "e" + combining acute accent is one grapheme.
        let value = "cafe\u{301}";
        let mut cursor = FieldCursor::default();
        cursor.move_to_end(value);
        assert_eq!(cursor.position(value), 4);

        let next = type_keys(value, &mut cursor, &[key(KeyCode::Backspace)]);
        assert_eq!(next, "caf");
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut cursor = FieldCursor::default();
        let value = type_keys("abc", &mut cursor, &[key(KeyCode::Delete)]);
        assert_eq!(value, "bc");
        assert_eq!(cursor.position(&value), 0);
    }

    #[test]
    fn test_ctrl_w_deletes_word_segments() {
        let mut cursor = FieldCursor::default();
        cursor.move_to_end("alice.smith");

        let value = type_keys("alice.smith", &mut cursor, &[ctrl('w')]);
        assert_eq!(value, "alice.");
        let value = type_keys(&value, &mut cursor, &[ctrl('w')]);
        assert_eq!(value, "alice");
        let value = type_keys(&value, &mut cursor, &[ctrl('w')]);
        assert_eq!(value, "");
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k_split_at_cursor() {
        let mut cursor = FieldCursor::default();
        cursor.move_to_end("hello world");
        let value = type_keys(
            "hello world",
            &mut cursor,
            &[
                key(KeyCode::Left),
                key(KeyCode::Left),
                key(KeyCode::Left),
                key(KeyCode::Left),
                key(KeyCode::Left),
                ctrl('k'),
            ],
        );
        assert_eq!(value, "hello ");

        let value = type_keys(&value, &mut cursor, &[ctrl('u')]);
        assert_eq!(value, "");
    }

    #[test]
    fn test_word_motion_with_ctrl_arrows() {
        let value = "john doe";
        let mut cursor = FieldCursor::default();
        let ctrl_right = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        let ctrl_left = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);

        cursor.handle_key(value, ctrl_right);
        assert_eq!(cursor.position(value), 4);
        cursor.handle_key(value, ctrl_right);
        assert_eq!(cursor.position(value), 5);
        cursor.handle_key(value, ctrl_left);
        assert_eq!(cursor.position(value), 4);
        cursor.handle_key(value, ctrl_left);
        assert_eq!(cursor.position(value), 0);
    }

    #[test]
    fn test_paste_strips_line_breaks() {
        let mut cursor = FieldCursor::default();
        let outcome = cursor.insert_str("", "bob\r\n");
        assert_eq!(outcome, FieldOutcome::Changed("bob".to_string()));
        assert_eq!(cursor.position("bob"), 3);
    }

    #[test]
    fn test_paste_of_only_newlines_is_ignored() {
        let mut cursor = FieldCursor::default();
        assert_eq!(cursor.insert_str("x", "\n\n"), FieldOutcome::Ignored);
    }

    #[test]
    fn test_cursor_clamps_after_external_clear() {
        let mut cursor = FieldCursor::default();
        cursor.move_to_end("alice");
        assert_eq!(cursor.position(""), 0);

        let value = type_keys("", &mut cursor, &[key(KeyCode::Char('z'))]);
        assert_eq!(value, "z");
    }

    #[test]
    fn test_control_chords_do_not_insert_text() {
        let mut cursor = FieldCursor::default();
        let outcome = cursor.handle_key("", ctrl('x'));
        assert_eq!(outcome, FieldOutcome::Ignored);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut cursor = FieldCursor::default();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(cursor.handle_key("", release), FieldOutcome::Ignored);
    }
}
