use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Key hints for the current focus
fn hints(app: &App) -> &'static str {
    if app.is_editing() {
        return "Enter save  Esc cancel";
    }
    match app.mode {
        Mode::Navigate => "j/k move  space done  e edit  d delete  a add  t theme  q quit",
        Mode::Input => "Enter add  Esc back",
    }
}

/// Render the status row (bottom of screen): key hints left, progress right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let width = area.width as usize;

    let (done, total) = {
        let snap = app.snapshot();
        let done = snap.tasks.iter().filter(|t| t.completed).count();
        (done, snap.tasks.len())
    };
    let progress = format!("{}/{} done ", done, total);

    let left = if app.show_key_hints {
        format!(" {}", hints(app))
    } else {
        String::new()
    };

    let mut spans = Vec::new();
    let content_width = display_width(&left) + display_width(&progress);
    if content_width < width {
        spans.push(Span::styled(left.clone(), Style::default().fg(theme.dim).bg(bg)));
        spans.push(Span::styled(
            " ".repeat(width - content_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(progress, Style::default().fg(theme.header).bg(bg)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
