//! View handler for the to-do session

use crate::formatting;
use crate::{SessionState, TodoSession};
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TodoSession<R, W> {
    /// Sorts the store by priority and prints the numbered list.
    pub(crate) fn handle_view(&mut self) -> Result<SessionState> {
        let listing = formatting::format_tasks(self.store.list_sorted_by_priority());
        self.console.say(&listing)?;
        Ok(SessionState::Menu)
    }
}
