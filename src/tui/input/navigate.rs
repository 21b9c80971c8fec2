use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Intent;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.snapshot().tasks.len();
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.dispatch(Intent::ToggleCompleted(app.cursor));
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.dispatch(Intent::BeginEdit(app.cursor));
            let end = app
                .snapshot()
                .edit_session
                .as_ref()
                .map_or(0, |s| s.draft_text.len());
            app.edit_cursor = end;
        }
        KeyCode::Char('d') | KeyCode::Delete => app.dispatch(Intent::DeleteTask(app.cursor)),
        KeyCode::Char('t') => app.dispatch(Intent::ToggleTheme),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            let end = app.snapshot().input_draft.len();
            app.mode = Mode::Input;
            app.input_cursor = end;
        }
        _ => {}
    }
}
