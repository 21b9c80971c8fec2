use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ThemeMode;
use crate::tui::app::App;
use crate::util::unicode::display_width;

const TITLE: &str = "To-Do List";

/// Icon for the theme toggle: a moon switches to dark, a sun back to light
pub fn mode_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    }
}

/// Render the title row with the theme toggle on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let icon = mode_icon(app.snapshot().theme);
    let width = area.width as usize;

    let title = format!(" {}", TITLE);
    let used = display_width(&title) + display_width(icon) + 1;
    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(theme.header)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    spans.push(Span::styled(icon, Style::default().fg(theme.mode_icon).bg(bg)));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let header_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        header_area,
    );
}
