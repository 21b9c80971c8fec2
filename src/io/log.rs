use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log level `{level}`: {source}")]
    BadLevel {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("could not install logger: {0}")]
    InstallError(String),
}

/// Route tracing events to `path` (appending). The terminal belongs to the
/// TUI, so nothing is ever written to stdout or stderr.
pub fn init_file_logging(path: &Path, level: &str) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(level).map_err(|e| LogError::BadLevel {
        level: level.to_string(),
        source: e,
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::InstallError(e.to_string()))
}
