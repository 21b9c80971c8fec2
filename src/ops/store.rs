use std::fmt;

use tracing::debug;

use crate::model::config::Config;
use crate::model::task::{EditSession, Snapshot, Task, ThemeMode};

use super::intent::Intent;

/// Text written into the new-task field when a task is marked complete
pub const COMPLETION_ECHO: &str = "Task Completed";

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Owns the task list, the edit session, the new-task draft and the theme.
///
/// Every operation is synchronous and total. Invalid input (out-of-range
/// index, empty text where text is required, no open edit session) leaves
/// the state untouched and returns normally. Each operation that does change
/// state hands a fresh [`Snapshot`] to every registered observer.
///
/// Tasks are addressed by position. A position is only meaningful until the
/// next insertion or deletion.
pub struct TaskListStore {
    tasks: Vec<Task>,
    edit_session: Option<EditSession>,
    input_draft: String,
    theme: ThemeMode,
    completion_echo: bool,
    observers: Vec<Observer>,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("edit_session", &self.edit_session)
            .field("input_draft", &self.input_draft)
            .field("theme", &self.theme)
            .field("completion_echo", &self.completion_echo)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TaskListStore {
    /// An empty list in light mode
    pub fn new() -> Self {
        TaskListStore {
            tasks: Vec::new(),
            edit_session: None,
            input_draft: String::new(),
            theme: ThemeMode::Light,
            completion_echo: true,
            observers: Vec::new(),
        }
    }

    /// A list seeded with open tasks. Empty strings are skipped.
    pub fn with_tasks<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        store.tasks = texts
            .into_iter()
            .map(Into::into)
            .filter(|text: &String| !text.is_empty())
            .map(Task::new)
            .collect();
        store
    }

    /// Build the startup store from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut store = Self::with_tasks(config.tasks.initial.iter().cloned());
        store.theme = config.ui.theme;
        store.completion_echo = config.behavior.completion_echo;
        store
    }

    /// Enable or disable the new-task field overwrite done by
    /// [`toggle_completed`](Self::toggle_completed).
    pub fn set_completion_echo(&mut self, enabled: bool) {
        self.completion_echo = enabled;
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register a callback that receives the new snapshot after every state
    /// change. Callbacks run synchronously in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    // -----------------------------------------------------------------------
    // Task operations
    // -----------------------------------------------------------------------

    /// Append an open task. Exactly-empty text is ignored (no trimming).
    /// Clears the new-task draft on success.
    pub fn add_task(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.tasks.push(Task::new(text));
        self.input_draft.clear();
        debug!(index = self.tasks.len() - 1, "task added");
        self.notify();
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    /// An open edit session keeps its (possibly stale) target index.
    pub fn delete_task(&mut self, index: usize) {
        if index >= self.tasks.len() {
            return;
        }
        self.tasks.remove(index);
        debug!(index, remaining = self.tasks.len(), "task deleted");
        self.notify();
    }

    /// Flip the completion flag of the task at `index`.
    ///
    /// With completion echo on, the new-task draft becomes
    /// [`COMPLETION_ECHO`] when the task is completed and is cleared when it
    /// is reopened.
    pub fn toggle_completed(&mut self, index: usize) {
        let Some(task) = self.tasks.get_mut(index) else {
            return;
        };
        task.completed = !task.completed;
        let completed = task.completed;
        if self.completion_echo {
            self.input_draft = if completed {
                COMPLETION_ECHO.to_string()
            } else {
                String::new()
            };
        }
        debug!(index, completed, "task toggled");
        self.notify();
    }

    // -----------------------------------------------------------------------
    // Edit session
    // -----------------------------------------------------------------------

    /// Open an edit session on the task at `index`, seeded with its text.
    /// Replaces any session already open.
    pub fn begin_edit(&mut self, index: usize) {
        let Some(task) = self.tasks.get(index) else {
            return;
        };
        self.edit_session = Some(EditSession {
            target_index: index,
            draft_text: task.text.clone(),
        });
        debug!(index, "edit started");
        self.notify();
    }

    /// Replace the draft text of the open session
    pub fn change_edit_draft(&mut self, text: &str) {
        let Some(session) = &mut self.edit_session else {
            return;
        };
        if session.draft_text == text {
            return;
        }
        session.draft_text = text.to_string();
        self.notify();
    }

    /// Write the draft into the target task and close the session.
    ///
    /// An empty draft keeps the session open and changes nothing. So does a
    /// target index that no longer exists after deletions.
    pub fn commit_edit(&mut self) {
        let Some(session) = &self.edit_session else {
            return;
        };
        if session.draft_text.is_empty() {
            return;
        }
        let index = session.target_index;
        let Some(task) = self.tasks.get_mut(index) else {
            return;
        };
        if let Some(session) = self.edit_session.take() {
            task.text = session.draft_text;
        }
        debug!(index, "edit committed");
        self.notify();
    }

    /// Close the session without touching any task
    pub fn cancel_edit(&mut self) {
        if self.edit_session.take().is_none() {
            return;
        }
        debug!("edit cancelled");
        self.notify();
    }

    // -----------------------------------------------------------------------
    // Draft and theme
    // -----------------------------------------------------------------------

    /// Replace the new-task draft (typing into the input field)
    pub fn set_input_draft(&mut self, text: &str) {
        if self.input_draft == text {
            return;
        }
        self.input_draft = text.to_string();
        self.notify();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.as_str(), "theme toggled");
        self.notify();
    }

    /// Dispatch one intent to the matching operation
    pub fn apply(&mut self, intent: &Intent) {
        match intent {
            Intent::AddTask(text) => self.add_task(text),
            Intent::SetInputDraft(text) => self.set_input_draft(text),
            Intent::ToggleCompleted(index) => self.toggle_completed(*index),
            Intent::BeginEdit(index) => self.begin_edit(*index),
            Intent::ChangeEditDraft(text) => self.change_edit_draft(text),
            Intent::CommitEdit => self.commit_edit(),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::DeleteTask(index) => self.delete_task(*index),
            Intent::ToggleTheme => self.toggle_theme(),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            edit_session: self.edit_session.clone(),
            input_draft: self.input_draft.clone(),
            theme: self.theme,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    pub fn input_draft(&self) -> &str {
        &self.input_draft
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_store() -> TaskListStore {
        TaskListStore::with_tasks(["Learn", "Build"])
    }

    fn task(text: &str, completed: bool) -> Task {
        Task {
            text: text.to_string(),
            completed,
        }
    }

    // --- add ---

    #[test]
    fn test_add_empty_is_noop() {
        let mut store = sample_store();
        store.set_input_draft("pending");
        store.add_task("");
        assert_eq!(store.len(), 2);
        assert_eq!(store.input_draft(), "pending");
    }

    #[test]
    fn test_add_appends_open_task_and_clears_draft() {
        let mut store = sample_store();
        store.set_input_draft("x");
        store.add_task("x");
        assert_eq!(store.len(), 3);
        assert_eq!(store.tasks()[2], task("x", false));
        assert_eq!(store.input_draft(), "");
    }

    #[test]
    fn test_add_does_not_trim() {
        let mut store = TaskListStore::new();
        store.add_task("   ");
        assert_eq!(store.tasks(), &[task("   ", false)]);
    }

    // --- delete ---

    #[test]
    fn test_delete_removes_exact_element() {
        let mut store = TaskListStore::with_tasks(["a", "b", "c"]);
        store.delete_task(1);
        assert_eq!(store.tasks(), &[task("a", false), task("c", false)]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut store = sample_store();
        let before = store.snapshot();
        store.delete_task(2);
        store.delete_task(usize::MAX);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete_leaves_edit_target_stale() {
        let mut store = TaskListStore::with_tasks(["a", "b", "c"]);
        store.begin_edit(2);
        store.delete_task(0);
        assert_eq!(store.edit_session().map(|s| s.target_index), Some(2));

        // Target now points past the end: commit does nothing, session stays
        store.change_edit_draft("z");
        store.commit_edit();
        assert_eq!(store.tasks(), &[task("b", false), task("c", false)]);
        assert!(store.edit_session().is_some());
    }

    #[test]
    fn test_stale_target_in_range_edits_shifted_task() {
        let mut store = TaskListStore::with_tasks(["a", "b", "c"]);
        store.begin_edit(1);
        store.delete_task(0);
        store.change_edit_draft("B2");
        store.commit_edit();
        assert_eq!(store.tasks(), &[task("b", false), task("B2", false)]);
    }

    // --- edit session ---

    #[test]
    fn test_begin_edit_seeds_draft() {
        let mut store = sample_store();
        store.begin_edit(1);
        assert_eq!(
            store.edit_session(),
            Some(&EditSession {
                target_index: 1,
                draft_text: "Build".into(),
            })
        );
    }

    #[test]
    fn test_begin_edit_invalid_index_is_noop() {
        let mut store = sample_store();
        store.begin_edit(5);
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn test_begin_edit_replaces_open_session() {
        let mut store = sample_store();
        store.begin_edit(0);
        store.change_edit_draft("changed");
        store.begin_edit(1);
        assert_eq!(store.edit_session().unwrap().target_index, 1);
        assert_eq!(store.edit_session().unwrap().draft_text, "Build");
    }

    #[test]
    fn test_commit_preserves_completed() {
        let mut store = sample_store();
        store.toggle_completed(0);
        store.begin_edit(0);
        store.change_edit_draft("y");
        store.commit_edit();
        assert_eq!(store.tasks()[0], task("y", true));
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn test_commit_empty_draft_keeps_session() {
        let mut store = sample_store();
        store.begin_edit(0);
        store.change_edit_draft("");
        store.commit_edit();
        assert_eq!(store.tasks()[0], task("Learn", false));
        assert_eq!(
            store.edit_session(),
            Some(&EditSession {
                target_index: 0,
                draft_text: String::new(),
            })
        );
    }

    #[test]
    fn test_cancel_discards_drafts() {
        let mut store = sample_store();
        store.begin_edit(1);
        store.change_edit_draft("one");
        store.change_edit_draft("two");
        store.cancel_edit();
        assert_eq!(store.tasks()[1], task("Build", false));
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn test_session_ops_without_session_are_noops() {
        let mut store = sample_store();
        let before = store.snapshot();
        store.change_edit_draft("x");
        store.commit_edit();
        store.cancel_edit();
        assert_eq!(store.snapshot(), before);
    }

    // --- completion ---

    #[test]
    fn test_toggle_completed_is_involution() {
        let mut store = sample_store();
        for n in 1..=5 {
            store.toggle_completed(1);
            assert_eq!(store.tasks()[1].completed, n % 2 == 1);
        }
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_completed_echoes_into_draft() {
        let mut store = sample_store();
        store.set_input_draft("half typed");
        store.toggle_completed(0);
        assert_eq!(store.input_draft(), COMPLETION_ECHO);
        store.toggle_completed(0);
        assert_eq!(store.input_draft(), "");
    }

    #[test]
    fn test_toggle_completed_without_echo() {
        let mut store = sample_store();
        store.set_completion_echo(false);
        store.set_input_draft("half typed");
        store.toggle_completed(0);
        assert!(store.tasks()[0].completed);
        assert_eq!(store.input_draft(), "half typed");
    }

    #[test]
    fn test_toggle_completed_invalid_index_is_noop() {
        let mut store = sample_store();
        let before = store.snapshot();
        store.toggle_completed(2);
        assert_eq!(store.snapshot(), before);
    }

    // --- theme ---

    #[test]
    fn test_toggle_theme() {
        let mut store = TaskListStore::new();
        assert_eq!(store.theme(), ThemeMode::Light);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemeMode::Dark);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemeMode::Light);
    }

    // --- construction ---

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.ui.theme = ThemeMode::Dark;
        config.behavior.completion_echo = false;
        config.tasks.initial = vec!["one".into(), "".into(), "two".into()];

        let mut store = TaskListStore::from_config(&config);
        assert_eq!(store.tasks(), &[task("one", false), task("two", false)]);
        assert_eq!(store.theme(), ThemeMode::Dark);

        store.toggle_completed(0);
        assert_eq!(store.input_draft(), "");
    }

    #[test]
    fn test_default_config_seeds_two_tasks() {
        let store = TaskListStore::from_config(&Config::default());
        assert_eq!(
            store.tasks(),
            &[
                task("Learn React Native", false),
                task("Build a To-Do App", false)
            ]
        );
    }

    // --- observers ---

    #[test]
    fn test_observers_see_each_change_once() {
        let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = sample_store();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snap| sink.borrow_mut().push(snap.clone()));

        store.add_task("x");
        store.toggle_theme();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[0].tasks.len(), 3);
        assert_eq!(seen.borrow()[1].theme, ThemeMode::Dark);
        assert_eq!(seen.borrow()[1], store.snapshot());
    }

    #[test]
    fn test_every_operation_emits_exactly_once() {
        let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = sample_store();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snap| sink.borrow_mut().push(snap.clone()));

        let mut expected = 0;
        let mut step = |store: &mut TaskListStore, op: &dyn Fn(&mut TaskListStore)| {
            op(store);
            expected += 1;
            assert_eq!(seen.borrow().len(), expected);
            assert_eq!(seen.borrow()[expected - 1], store.snapshot());
        };

        step(&mut store, &|s| s.set_input_draft("half"));
        step(&mut store, &|s| s.toggle_completed(0));
        step(&mut store, &|s| s.begin_edit(1));
        step(&mut store, &|s| s.change_edit_draft("Ship"));
        step(&mut store, &|s| s.commit_edit());
        step(&mut store, &|s| s.begin_edit(0));
        step(&mut store, &|s| s.cancel_edit());
        step(&mut store, &|s| s.delete_task(0));

        assert_eq!(store.tasks().to_vec(), vec![task("Ship", false)]);
        assert_eq!(store.input_draft(), COMPLETION_ECHO);
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn test_observers_not_called_for_noops() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = sample_store();
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add_task("");
        store.delete_task(9);
        store.begin_edit(9);
        store.change_edit_draft("x");
        store.commit_edit();
        store.cancel_edit();
        store.toggle_completed(9);
        store.set_input_draft("");
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = TaskListStore::new();
        for id in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(id));
        }
        store.toggle_theme();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    // --- end to end ---

    #[test]
    fn test_end_to_end_scenario() {
        let mut store = sample_store();

        store.toggle_completed(0);
        assert!(store.tasks()[0].completed);

        store.begin_edit(1);
        assert_eq!(
            store.edit_session(),
            Some(&EditSession {
                target_index: 1,
                draft_text: "Build".into(),
            })
        );

        store.change_edit_draft("Ship");
        store.commit_edit();
        assert_eq!(store.tasks()[1], task("Ship", false));
        assert!(store.edit_session().is_none());

        store.delete_task(0);
        assert_eq!(store.tasks().to_vec(), vec![task("Ship", false)]);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut store = TaskListStore::new();
        for intent in [
            Intent::SetInputDraft("Walk".into()),
            Intent::AddTask("Walk".into()),
            Intent::ToggleCompleted(0),
            Intent::BeginEdit(0),
            Intent::ChangeEditDraft("Run".into()),
            Intent::CommitEdit,
            Intent::ToggleTheme,
        ] {
            store.apply(&intent);
        }
        assert_eq!(
            store.snapshot(),
            Snapshot {
                tasks: vec![task("Run", true)],
                edit_session: None,
                input_draft: COMPLETION_ECHO.into(),
                theme: ThemeMode::Dark,
            }
        );

        store.apply(&Intent::BeginEdit(0));
        store.apply(&Intent::CancelEdit);
        store.apply(&Intent::DeleteTask(0));
        assert!(store.is_empty());
        assert!(store.edit_session().is_none());
    }
}
