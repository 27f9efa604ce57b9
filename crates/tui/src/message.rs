//! Application messages.
//!
//! All state changes flow through these messages, whether they originate
//! from the keyboard or from the spawned analysis task reporting back over
//! the internal channel.

use crossterm::event::KeyEvent;
use quartier_common::AnalysisResult;

/// Messages handled by [`crate::app::App::update`].
#[derive(Debug)]
pub enum AppMessage {
    /// Keyboard input
    KeyPress(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Animation tick
    Tick,

    /// The user asked to analyze this address
    SubmitAddress(String),

    /// The in-flight analysis settled with a payload
    AnalysisCompleted(Box<AnalysisResult>),

    /// The in-flight analysis settled with a user-presentable error message
    AnalysisFailed(String),

    /// The user asked to discard the current outcome and start over
    ResetRequested,

    /// Toggle the help overlay
    HelpToggle,

    /// Quit the application
    Quit,
}
