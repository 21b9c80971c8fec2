use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

use super::text_field;

const PLACEHOLDER: &str = "Add a new task";
const ADD_BUTTON: &str = " + ";

/// Render the new-task field and its add button
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = app.mode == Mode::Input && !app.is_editing();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(4), Constraint::Length(ADD_BUTTON.len() as u16 + 1)])
        .split(area);

    let border = if focused { theme.accent } else { theme.placeholder };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(theme.input_bg))
        .style(Style::default().bg(theme.input_bg));
    let inner = block.inner(cols[0]);
    frame.render_widget(block, cols[0]);

    let draft = app.snapshot().input_draft.clone();
    if draft.is_empty() {
        let hint = Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.placeholder).bg(theme.input_bg),
        );
        frame.render_widget(Paragraph::new(Line::from(hint)), inner);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
    } else {
        let style = Style::default().fg(theme.input_text).bg(theme.input_bg);
        let (span, caret) = text_field(&draft, app.input_cursor, inner, style);
        frame.render_widget(Paragraph::new(Line::from(span)), inner);
        if focused {
            frame.set_cursor_position(caret);
        }
    }

    // Add button, vertically centered next to the field
    let button_area = Rect {
        x: cols[1].x + 1,
        y: cols[1].y + cols[1].height / 2,
        width: cols[1].width.saturating_sub(1),
        height: 1.min(cols[1].height),
    };
    let button = Span::styled(
        ADD_BUTTON,
        Style::default()
            .fg(theme.modal_bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(button)), button_area);
}
