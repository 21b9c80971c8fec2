//! A one-screen to-do list.
//!
//! [`ops::TaskListStore`] holds all state (tasks, the edit dialog, the
//! new-task draft and the theme) behind a small set of synchronous
//! operations. The terminal UI in [`tui`] and the `replay` command in
//! [`cli`] are its only consumers: they forward [`ops::Intent`]s and draw
//! the [`model::Snapshot`]s it emits.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
