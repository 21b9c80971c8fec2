use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::task::ThemeMode;

/// Configuration from tick.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Tasks present when the app starts
    #[serde(default = "default_initial_tasks")]
    pub initial: Vec<String>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            initial: default_initial_tasks(),
        }
    }
}

fn default_initial_tasks() -> Vec<String> {
    vec!["Learn React Native".into(), "Build a To-Do App".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Completing a task writes "Task Completed" into the new-task field,
    /// reopening it clears the field.
    #[serde(default = "default_true")]
    pub completion_echo: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            completion_echo: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme at startup
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for the light palette, keyed by slot name
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Hex overrides for the dark palette, keyed by slot name
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            theme: ThemeMode::Light,
            show_key_hints: true,
            light: HashMap::new(),
            dark: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. Without one, nothing is logged.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// tracing filter directive, e.g. "info" or "tick=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
