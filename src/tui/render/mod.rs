pub mod edit_dialog;
pub mod header;
pub mod input_row;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::util::unicode::{display_width, scroll_start_for_width, truncate_to_width};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme().background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | input (3 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);

    // Edit dialog (rendered on top of everything but the status row)
    if app.is_editing() {
        edit_dialog::render_edit_dialog(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[3]);
}

/// A single-line text field with a caret. Scrolls horizontally so the caret
/// stays visible. Returns the span and the caret's screen position.
pub(super) fn text_field<'a>(
    text: &str,
    cursor: usize,
    area: Rect,
    style: Style,
) -> (Span<'a>, Position) {
    let width = area.width as usize;
    let cursor = cursor.min(text.len());
    let start = scroll_start_for_width(text, cursor, width);
    let visible = truncate_to_width(&text[start..], width);
    let caret_col = display_width(&text[start..cursor]).min(width.saturating_sub(1));
    (
        Span::styled(visible, style),
        Position::new(area.x + caret_col as u16, area.y),
    )
}

/// Center a `width` x `height` box in `area`, clamped to fit
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
