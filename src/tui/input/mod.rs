mod line;
mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

pub use line::{LineEdit, apply_key};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // The edit dialog is modal: it takes every key while open
    if app.is_editing() {
        text::handle_edit_dialog(app, key);
        return;
    }
    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input => text::handle_input(app, key),
    }
}

/// Handle a bracketed paste: inserted at the caret of whichever field has focus
pub fn handle_paste(app: &mut App, pasted: &str) {
    if pasted.is_empty() {
        return;
    }
    if app.is_editing() {
        text::paste_into_edit(app, pasted);
    } else if app.mode == Mode::Input {
        text::paste_into_input(app, pasted);
    }
}
