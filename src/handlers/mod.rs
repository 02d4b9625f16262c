//! Menu action handlers for the to-do session
//!
//! Each handler is in a separate file and returns the next session state.

mod add;
mod remove;
mod view;
