use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Row actions, shown on the selected row
const ACTIONS: &str = "e edit  d del ";

/// Render the task list, scrolling to keep the cursor visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let tasks = app.snapshot().tasks.clone();
    let height = area.height as usize;

    if tasks.is_empty() {
        let theme = app.theme();
        let line = Line::from(Span::styled(
            "  No tasks yet. Press a to add one.",
            Style::default().fg(theme.dim).bg(theme.background),
        ));
        frame.render_widget(Paragraph::new(line), Rect { height: 1, ..area });
        app.scroll_offset = 0;
        return;
    }

    // Keep cursor in view
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    app.scroll_offset = app.scroll_offset.min(tasks.len().saturating_sub(height));

    let show_selection = app.mode == Mode::Navigate && !app.is_editing();
    let theme = app.theme();
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, task)| {
            let selected = show_selection && i == app.cursor;
            task_line(task, selected, theme, area.width as usize)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn task_line<'a>(task: &Task, selected: bool, theme: &Theme, width: usize) -> Line<'a> {
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.item_bg
    };
    let marker = if selected { "\u{25B8} " } else { "  " };
    let check = format!("[{}] ", task.check_char());
    let prefix_width = display_width(marker) + display_width(&check);
    let actions_width = if selected { display_width(ACTIONS) } else { 0 };
    let text_budget = width.saturating_sub(prefix_width + actions_width);
    let text = truncate_to_width(&task.text, text_budget);

    let text_style = if task.completed {
        Style::default()
            .fg(theme.completed)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.item_text).bg(bg)
    };

    let used = prefix_width + display_width(&text);
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.accent).bg(bg)),
        Span::styled(check, Style::default().fg(theme.check).bg(bg)),
        Span::styled(text, text_style),
    ];
    if selected && used + actions_width <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - actions_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled("e edit", Style::default().fg(theme.edit_icon).bg(bg)));
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            "d del ",
            Style::default().fg(theme.delete_icon).bg(bg),
        ));
    }
    Line::from(spans)
}
