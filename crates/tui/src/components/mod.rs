//! Reusable UI components

pub mod status_line;

pub use status_line::{StatusLine, StatusLineMessage, StatusMessage, StatusSeverity};
