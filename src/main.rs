//! To-Do List - Main Entry Point
//!
//! This is the main entry point for the interactive to-do list.
//! The actual implementation is in the `todo_list` library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use todo_list::{Config, TodoSession};
use tracing_subscriber::EnvFilter;

/// Environment variable that turns on diagnostic logging
const DEBUG_ENV_VAR: &str = "TODO_LIST_DEBUG";

/// To-Do List - add, view and remove tasks prioritized as High, Medium or Low
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort on non-numeric menu choices or task numbers instead of re-prompting
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(args.strict);

    // Logs go to stderr so the menu on stdout stays clean
    if config.logging.enabled || std::env::var(DEBUG_ENV_VAR).is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&config.logging.filter))
            .with_writer(std::io::stderr)
            .init();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = TodoSession::with_config(stdin.lock(), stdout.lock(), &config);
    session.run()
}
