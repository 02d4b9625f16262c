//! Error types for the to-do list library

use thiserror::Error;

/// Errors raised by to-do list operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    /// Remove target outside the currently displayed 1-based range
    #[error("invalid task number {index} (valid range: 1..={len})")]
    InvalidIndex { index: i64, len: usize },

    /// Text that should have been an integer
    #[error("expected an integer but got '{input}'")]
    MalformedNumber { input: String },
}
