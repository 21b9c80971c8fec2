use std::cell::{Cell, Ref, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, Snapshot};
use crate::ops::{Intent, TaskListStore};

use super::input;
use super::render;
use super::theme::{Theme, Themes};

/// Where key presses go when no edit dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the task list
    Navigate,
    /// Typing into the new-task field
    Input,
}

/// Main application state
pub struct App {
    pub store: TaskListStore,
    /// Last snapshot emitted by the store; everything is drawn from this
    view: Rc<RefCell<Snapshot>>,
    /// Set by the store observer, cleared after each draw
    needs_redraw: Rc<Cell<bool>>,
    pub mode: Mode,
    pub should_quit: bool,
    pub themes: Themes,
    pub show_key_hints: bool,
    /// Selected row in the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the caret in the new-task draft
    pub input_cursor: usize,
    /// Byte offset of the caret in the edit dialog draft
    pub edit_cursor: usize,
}

impl App {
    pub fn new(mut store: TaskListStore, config: &Config) -> Self {
        let view = Rc::new(RefCell::new(store.snapshot()));
        let needs_redraw = Rc::new(Cell::new(true));
        {
            let view = Rc::clone(&view);
            let needs_redraw = Rc::clone(&needs_redraw);
            store.subscribe(move |snapshot| {
                *view.borrow_mut() = snapshot.clone();
                needs_redraw.set(true);
            });
        }

        App {
            store,
            view,
            needs_redraw,
            mode: Mode::Navigate,
            should_quit: false,
            themes: Themes::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            input_cursor: 0,
            edit_cursor: 0,
        }
    }

    /// The state currently on screen
    pub fn snapshot(&self) -> Ref<'_, Snapshot> {
        self.view.borrow()
    }

    /// Palette for the current theme mode
    pub fn theme(&self) -> &Theme {
        self.themes.get(self.view.borrow().theme)
    }

    pub fn is_editing(&self) -> bool {
        self.view.borrow().edit_session.is_some()
    }

    /// Forward an intent to the store and keep cursors inside the new state
    pub fn dispatch(&mut self, intent: Intent) {
        self.store.apply(&intent);
        self.clamp_cursors();
    }

    /// Take the redraw flag, resetting it
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    fn clamp_cursors(&mut self) {
        let (len, input, edit) = {
            let snap = self.view.borrow();
            (
                snap.tasks.len(),
                snap.input_draft.clone(),
                snap.edit_session.as_ref().map(|s| s.draft_text.clone()),
            )
        };
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.input_cursor = clamp_to_boundary(&input, self.input_cursor);
        self.edit_cursor = edit.map_or(0, |draft| clamp_to_boundary(&draft, self.edit_cursor));
    }
}

/// Caret positions that fall outside the text (or inside a char) snap to the end
fn clamp_to_boundary(text: &str, cursor: usize) -> usize {
    if cursor <= text.len() && text.is_char_boundary(cursor) {
        cursor
    } else {
        text.len()
    }
}

/// Run the TUI application
pub fn run(store: TaskListStore, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!(tasks = app.store.len(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    info!("tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Store changes flag a redraw through the observer; cursor
                // and focus moves don't, so key events always redraw
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    app.request_redraw();
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                    app.request_redraw();
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
