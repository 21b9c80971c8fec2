use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Intent;
use crate::tui::app::{App, Mode};

use super::line::{LineEdit, apply_key, insert};

/// Keys while the new-task field has focus
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            let draft = app.snapshot().input_draft.clone();
            app.dispatch(Intent::AddTask(draft));
        }
        _ => {
            let edit = apply_key(&app.snapshot().input_draft, app.input_cursor, key);
            apply_to_input(app, edit);
        }
    }
}

/// Keys while the edit dialog is open
pub(super) fn handle_edit_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(Intent::CancelEdit),
        KeyCode::Enter => app.dispatch(Intent::CommitEdit),
        _ => {
            let edit = apply_key(&edit_draft(app), app.edit_cursor, key);
            apply_to_edit(app, edit);
        }
    }
}

pub(super) fn paste_into_input(app: &mut App, pasted: &str) {
    let edit = insert(&app.snapshot().input_draft, app.input_cursor, pasted);
    apply_to_input(app, edit);
}

pub(super) fn paste_into_edit(app: &mut App, pasted: &str) {
    let edit = insert(&edit_draft(app), app.edit_cursor, pasted);
    apply_to_edit(app, edit);
}

fn edit_draft(app: &App) -> String {
    app.snapshot()
        .edit_session
        .as_ref()
        .map(|s| s.draft_text.clone())
        .unwrap_or_default()
}

fn apply_to_input(app: &mut App, edit: LineEdit) {
    match edit {
        LineEdit::Changed(text, cursor) => {
            app.input_cursor = cursor;
            app.dispatch(Intent::SetInputDraft(text));
        }
        LineEdit::Moved(cursor) => app.input_cursor = cursor,
        LineEdit::Ignored => {}
    }
}

fn apply_to_edit(app: &mut App, edit: LineEdit) {
    match edit {
        LineEdit::Changed(text, cursor) => {
            app.edit_cursor = cursor;
            app.dispatch(Intent::ChangeEditDraft(text));
        }
        LineEdit::Moved(cursor) => app.edit_cursor = cursor,
        LineEdit::Ignored => {}
    }
}
