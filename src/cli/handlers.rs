use std::fs;
use std::io::{self, Read};

use tracing::info;

use crate::cli::commands::{Cli, Commands, ReplayArgs};
use crate::cli::output::{format_snapshot, snapshot_json};
use crate::io::config_io::load_config;
use crate::io::log::init_file_logging;
use crate::model::{Config, Snapshot, ThemeMode};
use crate::ops::{Intent, ScriptError, TaskListStore, parse_script};

/// Run the parsed command line
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&cli)?;

    if let Some(path) = &config.log.file {
        init_file_logging(path, &config.log.level)?;
    }

    match cli.command {
        None => crate::tui::run(TaskListStore::from_config(&config), &config),
        Some(Commands::Replay(args)) => cmd_replay(&args, &config),
    }
}

/// Load the config file and apply command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = load_config(cli.config.as_deref())?;
    if cli.dark {
        config.ui.theme = ThemeMode::Dark;
    }
    if let Some(path) = &cli.log_file {
        config.log.file = Some(path.clone());
    }
    Ok(config)
}

fn cmd_replay(args: &ReplayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_script(&args.script)?;
    let intents = parse_script(&source)?;
    let snapshot = replay(TaskListStore::from_config(config), &intents);
    info!(intents = intents.len(), "replay finished");

    if args.json {
        println!("{}", snapshot_json(&snapshot)?);
    } else {
        print!("{}", format_snapshot(&snapshot));
    }
    Ok(())
}

/// Apply `intents` in order and return the final state
pub fn replay(mut store: TaskListStore, intents: &[Intent]) -> Snapshot {
    for intent in intents {
        store.apply(intent);
    }
    store.snapshot()
}

fn read_script(path: &str) -> Result<String, ScriptError> {
    let read_error = |e| ScriptError::ReadError {
        path: path.to_string(),
        source: e,
    };
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(read_error)
    }
}
