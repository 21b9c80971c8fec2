use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display text (never empty once stored)
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an open (not completed) task
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }

    /// The character shown inside the completion box
    pub fn check_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// The task currently open in the edit dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// Position of the task being edited at the time the session started.
    /// Not adjusted when earlier tasks are deleted.
    pub target_index: usize,
    /// Text typed so far; must be non-empty to commit
    pub draft_text: String,
}

/// Light or dark presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Owned, read-only copy of the store state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub edit_session: Option<EditSession>,
    pub input_draft: String,
    pub theme: ThemeMode,
}
