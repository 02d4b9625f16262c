//! To-Do List Library
//!
//! This library provides an interactive, in-memory to-do list where every task
//! carries a priority (High, Medium or Low). Tasks are listed most urgent
//! first and removed by their displayed position.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Session Layer**: `TodoSession` - Drives the text menu over any reader/writer
//! - **Domain Layer**: `todo` module - Task, Priority and the TaskStore
//! - **I/O Layer**: `console` module - Prompting and line reading
//!
//! # Example
//!
//! ```no_run
//! use todo_list::TodoSession;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let stdin = std::io::stdin();
//!     let stdout = std::io::stdout();
//!     let mut session = TodoSession::new(stdin.lock(), stdout.lock(), false);
//!     session.run()
//! }
//! ```

pub mod config;
mod console;
mod error;
pub mod formatting;
mod handlers;
mod todo;
pub mod validation;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use error::TodoError;
pub use todo::{Priority, Task, TaskStore};

/// A selection from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Remove,
    Exit,
    /// Any number outside 1-4
    Unknown(i64),
}

impl From<i64> for MenuChoice {
    fn from(value: i64) -> Self {
        match value {
            1 => MenuChoice::Add,
            2 => MenuChoice::View,
            3 => MenuChoice::Remove,
            4 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

/// State of the menu loop after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Show the menu again
    Menu,
    /// Terminal state: exit was chosen or input ran out
    Done,
}

/// Interactive to-do list session
///
/// Owns the task store for its whole lifetime and talks to the user through
/// a [`Console`]. Nothing outlives the session.
pub struct TodoSession<R, W> {
    pub(crate) store: TaskStore,
    pub(crate) console: Console<R, W>,
    /// Abort on malformed numbers instead of re-prompting
    pub(crate) strict_input: bool,
}

impl<R: BufRead, W: Write> TodoSession<R, W> {
    /// Create a new session with an empty store
    ///
    /// # Arguments
    /// * `reader` - Source of user input lines
    /// * `writer` - Destination of prompts and messages
    /// * `strict_input` - Fail with `TodoError::MalformedNumber` on non-numeric
    ///   menu choices or task numbers instead of reporting and continuing
    pub fn new(reader: R, writer: W, strict_input: bool) -> Self {
        Self {
            store: TaskStore::new(),
            console: Console::new(reader, writer),
            strict_input,
        }
    }

    /// Create a session using the input policy from `config`
    pub fn with_config(reader: R, writer: W, config: &Config) -> Self {
        Self::new(reader, writer, config.input.strict)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Consume the session and return its writer
    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    /// Run the menu loop until exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        debug!(strict_input = self.strict_input, "starting to-do session");
        while self.step()? == SessionState::Menu {}
        debug!(remaining = self.store.len(), "to-do session finished");
        Ok(())
    }

    /// Show the menu once, read a choice and dispatch it
    ///
    /// # Returns
    /// The state to continue in, or an error for I/O failures and, in strict
    /// mode, malformed choices
    pub fn step(&mut self) -> Result<SessionState> {
        self.console.say(formatting::MENU)?;
        let Some(line) = self.console.prompt(formatting::CHOICE_PROMPT)? else {
            warn!("input closed at menu prompt, ending session");
            return Ok(SessionState::Done);
        };

        let choice = match validation::parse_number(&line) {
            Ok(number) => MenuChoice::from(number),
            Err(err) if self.strict_input => {
                return Err(err).context("Menu choice must be a number");
            }
            Err(err) => {
                warn!(%err, "malformed menu choice");
                self.console.say(formatting::INVALID_CHOICE)?;
                return Ok(SessionState::Menu);
            }
        };

        self.dispatch(choice)
    }

    /// Perform one menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<SessionState> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::View => self.handle_view(),
            MenuChoice::Remove => self.handle_remove(),
            MenuChoice::Exit => {
                self.console.say(formatting::EXITING)?;
                Ok(SessionState::Done)
            }
            MenuChoice::Unknown(_) => {
                self.console.say(formatting::INVALID_CHOICE)?;
                Ok(SessionState::Menu)
            }
        }
    }
}
