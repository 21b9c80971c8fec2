use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a one-screen to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this TOML file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Start in dark mode (overrides the config)
    #[arg(long, global = true)]
    pub dark: bool,

    /// Write logs to this file (overrides the config)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of intents to a fresh list and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, one intent per line (`-` for stdin)
    pub script: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
