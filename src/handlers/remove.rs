//! Remove handler for the to-do session

use crate::formatting;
use crate::validation;
use crate::{SessionState, TodoSession};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

impl<R: BufRead, W: Write> TodoSession<R, W> {
    /// Shows the current numbering, then removes the task the user picks.
    ///
    /// Nothing is asked when the store is empty. Out-of-range numbers leave
    /// the store untouched.
    pub(crate) fn handle_remove(&mut self) -> Result<SessionState> {
        self.handle_view()?;
        if self.store.is_empty() {
            return Ok(SessionState::Menu);
        }

        let Some(line) = self.console.prompt(formatting::REMOVE_PROMPT)? else {
            warn!("input closed at remove prompt, ending session");
            return Ok(SessionState::Done);
        };

        let index = match validation::parse_number(&line) {
            Ok(index) => index,
            Err(err) if self.strict_input => {
                return Err(err).context("Task number must be a number");
            }
            Err(err) => {
                warn!(%err, "malformed task number");
                self.console.say(formatting::INVALID_TASK_NUMBER)?;
                return Ok(SessionState::Menu);
            }
        };

        match self.store.remove_at(index) {
            Ok(_) => self.console.say(formatting::TASK_REMOVED)?,
            Err(err) => {
                warn!(%err, "remove rejected");
                self.console.say(formatting::INVALID_TASK_NUMBER)?;
            }
        }
        Ok(SessionState::Menu)
    }
}
