//! Input parsing helpers for the to-do menu
//!
//! This module turns raw input lines into priorities, menu choices and task
//! numbers. Priority parsing never fails: unknown letters fall back to Low.

use crate::error::TodoError;
use crate::todo::Priority;

/// Result of parsing a priority letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPriority {
    pub priority: Priority,
    /// True when the input was not H, M or L and Low was used instead
    pub defaulted: bool,
}

/// Parse the priority answer typed by the user
///
/// Only the first character of the line is considered, so "high", "H" and
/// "h" all map to High. Leading whitespace is not skipped: " h" maps to Low.
/// Anything else, including an empty line, maps to Low with `defaulted` set
/// so the caller can tell the user.
///
/// # Arguments
/// * `input` - Raw line typed at the priority prompt
///
/// # Examples
/// ```
/// # use todo_list::validation::parse_priority;
/// # use todo_list::Priority;
/// assert_eq!(parse_priority("m").priority, Priority::Medium);
/// assert!(parse_priority("x").defaulted);
/// ```
pub fn parse_priority(input: &str) -> ParsedPriority {
    match input.chars().next().and_then(Priority::from_letter) {
        Some(priority) => ParsedPriority {
            priority,
            defaulted: false,
        },
        None => ParsedPriority {
            priority: Priority::Low,
            defaulted: true,
        },
    }
}

/// Parse an integer typed at the menu or remove prompt
///
/// # Arguments
/// * `input` - Raw line; surrounding whitespace is ignored
///
/// # Returns
/// The parsed number or `TodoError::MalformedNumber` carrying the trimmed input
pub fn parse_number(input: &str) -> Result<i64, TodoError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| TodoError::MalformedNumber {
            input: trimmed.to_string(),
        })
}
