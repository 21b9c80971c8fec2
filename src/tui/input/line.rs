use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

/// Outcome of a key press on a single-line text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Text changed; new text and caret
    Changed(String, usize),
    /// Only the caret moved
    Moved(usize),
    /// Not a line-editing key
    Ignored,
}

/// Apply a key to `text` with the caret at byte offset `cursor`.
/// Caret movement and deletion work on grapheme clusters.
pub fn apply_key(text: &str, cursor: usize, key: KeyEvent) -> LineEdit {
    let cursor = cursor.min(text.len());
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('a') if ctrl => LineEdit::Moved(0),
        KeyCode::Char('e') if ctrl => LineEdit::Moved(text.len()),
        KeyCode::Char('u') if ctrl => {
            LineEdit::Changed(text[cursor..].to_string(), 0)
        }
        KeyCode::Char('k') if ctrl => LineEdit::Changed(text[..cursor].to_string(), cursor),
        KeyCode::Char('w') if ctrl => delete_word_back(text, cursor),
        KeyCode::Backspace if alt => delete_word_back(text, cursor),
        KeyCode::Char(c) if !ctrl && !alt => insert(text, cursor, &c.to_string()),
        KeyCode::Backspace => match prev_grapheme_boundary(text, cursor) {
            Some(start) => splice(text, start, cursor),
            None => LineEdit::Ignored,
        },
        KeyCode::Delete => match next_grapheme_boundary(text, cursor) {
            Some(end) => splice(text, cursor, end),
            None => LineEdit::Ignored,
        },
        KeyCode::Left if alt || ctrl => LineEdit::Moved(word_boundary_left(text, cursor)),
        KeyCode::Left => LineEdit::Moved(prev_grapheme_boundary(text, cursor).unwrap_or(0)),
        KeyCode::Right => {
            LineEdit::Moved(next_grapheme_boundary(text, cursor).unwrap_or(text.len()))
        }
        KeyCode::Home => LineEdit::Moved(0),
        KeyCode::End => LineEdit::Moved(text.len()),
        _ => LineEdit::Ignored,
    }
}

/// Insert `s` at the caret. Newlines become spaces (single-line field).
pub fn insert(text: &str, cursor: usize, s: &str) -> LineEdit {
    let cursor = cursor.min(text.len());
    let s = s.replace(['\r', '\n'], " ");
    let mut out = String::with_capacity(text.len() + s.len());
    out.push_str(&text[..cursor]);
    out.push_str(&s);
    out.push_str(&text[cursor..]);
    LineEdit::Changed(out, cursor + s.len())
}

fn delete_word_back(text: &str, cursor: usize) -> LineEdit {
    let start = word_boundary_left(text, cursor);
    if start == cursor {
        return LineEdit::Ignored;
    }
    splice(text, start, cursor)
}

/// Remove `text[start..end]`, leaving the caret at `start`
fn splice(text: &str, start: usize, end: usize) -> LineEdit {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    LineEdit::Changed(out, start)
}
