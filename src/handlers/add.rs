//! Add handler for the to-do session

use crate::formatting;
use crate::validation;
use crate::{SessionState, TodoSession};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

impl<R: BufRead, W: Write> TodoSession<R, W> {
    /// Prompts for a description and a priority letter, then appends the task.
    /// An unrecognized priority letter is reported and replaced by Low.
    pub(crate) fn handle_add(&mut self) -> Result<SessionState> {
        let Some(description) = self.console.prompt(formatting::TASK_PROMPT)? else {
            warn!("input closed at task prompt, ending session");
            return Ok(SessionState::Done);
        };
        let Some(priority_input) = self.console.prompt(formatting::PRIORITY_PROMPT)? else {
            warn!("input closed at priority prompt, ending session");
            return Ok(SessionState::Done);
        };

        let parsed = validation::parse_priority(&priority_input);
        if parsed.defaulted {
            warn!(input = %priority_input, "unrecognized priority, using Low");
            self.console.say(formatting::PRIORITY_DEFAULTED)?;
        }

        self.store.add(description, parsed.priority);
        self.console.say(formatting::TASK_ADDED)?;
        Ok(SessionState::Menu)
    }
}
