use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::{centered_rect, text_field};

const DIALOG_HEIGHT: u16 = 7;

/// Render the modal "Edit Task" dialog over `area`
pub fn render_edit_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = app
        .snapshot()
        .edit_session
        .as_ref()
        .map(|s| s.draft_text.clone())
    else {
        return;
    };
    let theme = app.theme();
    let width = ((u32::from(area.width) * 4 / 5) as u16).max(20);
    let dialog = centered_rect(width, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(" Edit Task ")
        .title_style(
            Style::default()
                .fg(theme.modal_text)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.modal_border))
        .style(Style::default().bg(theme.modal_bg));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    if inner.height < 4 || inner.width < 4 {
        return;
    }

    // Text field with its own border
    let field_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width - 2,
        height: 3,
    };
    let field = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.modal_border))
        .style(Style::default().bg(theme.modal_bg));
    let field_inner = field.inner(field_area);
    frame.render_widget(field, field_area);

    let style = Style::default().fg(theme.modal_text).bg(theme.modal_bg);
    let (span, caret) = text_field(&draft, app.edit_cursor, field_inner, style);
    frame.render_widget(Paragraph::new(Line::from(span)), field_inner);
    frame.set_cursor_position(caret);

    // Buttons
    let button = Style::default()
        .fg(theme.modal_bg)
        .bg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let gap = Style::default().bg(theme.modal_bg);
    let buttons = Line::from(vec![
        Span::styled(" ", gap),
        Span::styled(" Save ", button),
        Span::styled("  ", gap),
        Span::styled(" Cancel ", button),
    ]);
    let buttons_area = Rect {
        y: field_area.y + field_area.height,
        height: 1,
        ..inner
    };
    frame.render_widget(Paragraph::new(buttons), buttons_area);
}
