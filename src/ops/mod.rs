pub mod intent;
pub mod store;

pub use intent::{Intent, ScriptError, parse_script};
pub use store::{COMPLETION_ECHO, TaskListStore};
