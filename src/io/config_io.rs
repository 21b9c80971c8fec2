use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => read_config(p),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::task::ThemeMode;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), text).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = read_config(file.path()).unwrap();
        assert_eq!(
            config.tasks.initial,
            vec!["Learn React Native", "Build a To-Do App"]
        );
        assert!(config.behavior.completion_echo);
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r##"
[tasks]
initial = ["Water plants"]

[behavior]
completion_echo = false

[ui]
theme = "dark"
show_key_hints = false

[ui.dark]
background = "#000000"

[log]
file = "tick.log"
level = "debug"
"##,
        );
        let config = read_config(file.path()).unwrap();
        assert_eq!(config.tasks.initial, vec!["Water plants"]);
        assert!(!config.behavior.completion_echo);
        assert_eq!(config.ui.theme, ThemeMode::Dark);
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.dark.get("background").map(String::as_str),
            Some("#000000")
        );
        assert!(config.ui.light.is_empty());
        assert_eq!(config.log.file, Some(PathBuf::from("tick.log")));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_empty_initial_list() {
        let file = write_config("[tasks]\ninitial = []\n");
        let config = read_config(file.path()).unwrap();
        assert!(config.tasks.initial.is_empty());
    }

    #[test]
    fn test_bad_theme_is_parse_error() {
        let file = write_config("[ui]\ntheme = \"sepia\"\n");
        let err = read_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().starts_with("could not read "));
    }

    #[test]
    fn test_load_without_path_is_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.tasks.initial.len(), 2);
    }
}
