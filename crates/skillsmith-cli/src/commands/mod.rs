//! Command handlers.
//!
//! Each handler translates parsed arguments into core calls and renders the
//! result through the [`crate::output::OutputManager`]. No business logic
//! lives here.

pub mod categories;
pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod scaffold;
