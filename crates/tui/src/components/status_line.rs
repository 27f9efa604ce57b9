//! Status line widget for the bottom row of the screen.
//!
//! Shows the latest ambient message (progress notes, defect reports) with
//! color coding by severity, and falls back to a key hint when there is
//! nothing to say. The error banner for a failed analysis is not rendered
//! here; that one replaces the report area entirely.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

/// Severity levels for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    /// Informational message (blue)
    Info,
    /// Warning that doesn't block operation (yellow)
    Warning,
    /// Critical defect, e.g. the service broke its data contract (bright red)
    Critical,
}

impl StatusSeverity {
    /// Color associated with this severity level
    pub fn color(&self) -> Color {
        match self {
            StatusSeverity::Info => Color::Blue,
            StatusSeverity::Warning => Color::Yellow,
            StatusSeverity::Critical => Color::LightRed,
        }
    }

    /// Prefix symbol for this severity level
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusSeverity::Info => "ℹ",
            StatusSeverity::Warning => "⚠",
            StatusSeverity::Critical => "✗",
        }
    }
}

/// A status message to display
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The severity level of this message
    pub severity: StatusSeverity,
    /// The message text to display
    pub message: String,
    /// When this message was created
    pub timestamp: DateTime<Utc>,
}

impl StatusMessage {
    /// Create a new info message
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new warning message
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Warning,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new critical message
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Critical,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Formatted display text for this message
    pub fn display_text(&self) -> String {
        format!("{} {}", self.severity.symbol(), self.message)
    }
}

/// Messages for updating the status line component
#[derive(Debug, Clone)]
pub enum StatusLineMessage {
    /// Set an info message
    Info(String),
    /// Set a warning message
    Warning(String),
    /// Set a critical message
    Critical(String),
    /// Clear the current message
    Clear,
}

/// Status line component
#[derive(Debug, Default)]
pub struct StatusLine {
    current_message: Option<StatusMessage>,
}

impl StatusLine {
    /// Create a new status line component
    pub fn new() -> Self {
        Self::default()
    }

    /// Current message, if any
    pub fn current_message(&self) -> Option<&StatusMessage> {
        self.current_message.as_ref()
    }

    /// Handle a status line message
    pub fn handle_message(&mut self, message: StatusLineMessage) {
        debug!(message = ?message, "status line update");
        match message {
            StatusLineMessage::Info(text) => {
                self.current_message = Some(StatusMessage::info(text))
            }
            StatusLineMessage::Warning(text) => {
                self.current_message = Some(StatusMessage::warning(text))
            }
            StatusLineMessage::Critical(text) => {
                self.current_message = Some(StatusMessage::critical(text))
            }
            StatusLineMessage::Clear => self.current_message = None,
        }
    }

    /// Render the status line widget
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = if let Some(ref message) = self.current_message {
            let style = Style::default()
                .fg(message.severity.color())
                .add_modifier(Modifier::BOLD);
            (message.display_text(), style)
        } else {
            (
                " Enter: analyze · Esc: reset · Tab: focus report · F1: help".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        f.render_widget(Paragraph::new(text).style(style), area);
    }
}
