//! Main application loop.
//!
//! Message-driven: keyboard events and settlements from the spawned
//! analysis task all become [`AppMessage`]s handled by `update()`. The
//! request lifecycle itself lives in the [`RequestController`]; this module
//! wires it to the terminal and to the HTTP client.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tui_textarea::TextArea;

use quartier_client::{AnalysisClient, RequestController, SubmitOutcome};

use crate::{
    components::{StatusLine, StatusLineMessage},
    config::Config,
    message::AppMessage,
    report::{self, ReportView},
    view,
};

/// Application state and event loop.
pub struct App {
    /// Application configuration
    config: Config,

    /// HTTP client for the analysis service
    client: AnalysisClient,

    /// Request lifecycle state machine
    controller: RequestController,

    /// Screen derived from the controller state, rebuilt on every transition
    current_view: ReportView,

    /// Terminal manager
    terminal: Terminal<CrosstermBackend<io::Stdout>>,

    /// Address input box
    address_input: TextArea<'static>,

    /// Whether the input box has focus (otherwise the report scrolls)
    input_focused: bool,

    /// Scroll offset into the report
    report_scroll: u16,

    /// Loading animation state
    throbber_state: ThrobberState,

    /// Status line component
    status_line: StatusLine,

    /// Show help overlay
    show_help: bool,

    /// App running state
    running: bool,

    /// Channel for messages from async tasks
    internal_sender: mpsc::UnboundedSender<AppMessage>,
    internal_receiver: mpsc::UnboundedReceiver<AppMessage>,

    /// Last animation tick
    last_animation: Instant,
}

impl App {
    /// Create a new application instance and take over the terminal.
    #[instrument(skip(config))]
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing quartier TUI");

        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

        let client = AnalysisClient::with_timeout(
            &config.server_url,
            Duration::from_secs(config.request.timeout_secs),
        )
        .context("Failed to initialize analysis client")?;

        let (internal_sender, internal_receiver) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            client,
            controller: RequestController::new(),
            current_view: ReportView::Idle,
            terminal,
            address_input: new_address_input(),
            input_focused: true,
            report_scroll: 0,
            throbber_state: ThrobberState::default(),
            status_line: StatusLine::new(),
            show_help: false,
            running: true,
            internal_sender,
            internal_receiver,
            last_animation: Instant::now(),
        })
    }

    /// Run the main application loop.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting application event loop");

        let animation_interval = Duration::from_millis(self.config.ui.animation_interval_ms);
        self.last_animation = Instant::now();

        loop {
            if !self.running {
                break;
            }

            if let Some(msg) = self.poll_terminal_event()? {
                self.update(msg)?;
            }

            while let Ok(msg) = self.internal_receiver.try_recv() {
                self.update(msg)?;
            }

            if self.last_animation.elapsed() >= animation_interval {
                self.update(AppMessage::Tick)?;
                self.last_animation = Instant::now();
            }

            self.render()?;

            // Small delay to prevent a busy loop
            tokio::time::sleep(Duration::from_millis(16)).await;
        }

        info!("Application loop ended");
        Ok(())
    }

    /// Poll the terminal for keyboard and resize events.
    fn poll_terminal_event(&self) -> Result<Option<AppMessage>> {
        if event::poll(Duration::from_millis(10)).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key_event) => return Ok(Some(AppMessage::KeyPress(key_event))),
                Event::Resize(width, height) => return Ok(Some(AppMessage::Resize(width, height))),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Apply one message to the application state.
    fn update(&mut self, message: AppMessage) -> Result<()> {
        match message {
            AppMessage::KeyPress(key_event) => {
                self.handle_key_event(key_event)?;
            }

            AppMessage::Resize(width, height) => {
                // The next draw picks up the new size automatically.
                debug!("Terminal resized to {}x{}", width, height);
            }

            AppMessage::Tick => {
                self.throbber_state.calc_next();
            }

            AppMessage::SubmitAddress(address) => {
                self.submit_address(address);
            }

            AppMessage::AnalysisCompleted(result) => {
                self.controller.complete(*result);
                self.report_scroll = 0;
                self.status_line
                    .handle_message(StatusLineMessage::Info("Analysis complete".to_string()));
                self.refresh_view();
            }

            AppMessage::AnalysisFailed(message) => {
                warn!(message = %message, "analysis settled with an error");
                self.controller.fail(message);
                self.refresh_view();
            }

            AppMessage::ResetRequested => {
                self.controller.reset();
                self.address_input = new_address_input();
                self.report_scroll = 0;
                self.input_focused = true;
                self.status_line.handle_message(StatusLineMessage::Clear);
                self.refresh_view();
            }

            AppMessage::HelpToggle => {
                self.show_help = !self.show_help;
            }

            AppMessage::Quit => {
                self.running = false;
            }
        }

        Ok(())
    }

    /// Hand the address to the controller and, if accepted, issue the one
    /// outbound call. Rejections are silent: no transition, no message.
    fn submit_address(&mut self, address: String) {
        match self.controller.submit(&address) {
            SubmitOutcome::Dispatched { address } => {
                self.status_line.handle_message(StatusLineMessage::Info(format!(
                    "Analyzing {}",
                    address.trim()
                )));
                self.refresh_view();

                let client = self.client.clone();
                let sender = self.internal_sender.clone();
                tokio::spawn(async move {
                    match client.analyze(&address).await {
                        Ok(result) => {
                            let _ = sender.send(AppMessage::AnalysisCompleted(Box::new(result)));
                        }
                        Err(e) => {
                            let _ = sender.send(AppMessage::AnalysisFailed(e.user_message()));
                        }
                    }
                });
            }
            SubmitOutcome::RejectedBlank | SubmitOutcome::RejectedInFlight => {
                debug!("submission absorbed");
            }
        }
    }

    /// Rebuild the screen from the controller state. A payload that breaks
    /// the display contract is reported as a defect instead of mis-rendered.
    fn refresh_view(&mut self) {
        self.current_view = match report::view_of(self.controller.state()) {
            Ok(view) => view,
            Err(violation) => {
                error!(error = %violation, "analysis payload violates the display contract");
                self.status_line
                    .handle_message(StatusLineMessage::Critical(violation.to_string()));
                ReportView::Error {
                    message: "Analysis service returned invalid data".to_string(),
                }
            }
        };
    }

    /// Handle keyboard events.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.show_help {
            // In help mode, any key closes help
            self.show_help = false;
            return Ok(());
        }

        let pending = self.controller.state().is_pending();

        match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                self.update(AppMessage::Quit)?;
            }

            KeyEvent {
                code: KeyCode::F(1),
                ..
            } => {
                self.update(AppMessage::HelpToggle)?;
            }

            KeyEvent {
                code: KeyCode::Esc, ..
            } if !pending => {
                self.update(AppMessage::ResetRequested)?;
            }

            KeyEvent {
                code: KeyCode::Tab, ..
            } => {
                self.input_focused = !self.input_focused;
            }

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } if self.input_focused => {
                // The controller absorbs blank and in-flight submissions.
                let address = self.current_address();
                self.update(AppMessage::SubmitAddress(address))?;
            }

            KeyEvent {
                code: KeyCode::Up, ..
            } if !self.input_focused => {
                self.report_scroll = self.report_scroll.saturating_sub(1);
            }

            KeyEvent {
                code: KeyCode::Down,
                ..
            } if !self.input_focused => {
                self.report_scroll = self.report_scroll.saturating_add(1);
            }

            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } if !self.input_focused => {
                self.report_scroll = self.report_scroll.saturating_sub(10);
            }

            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } if !self.input_focused => {
                self.report_scroll = self.report_scroll.saturating_add(10);
            }

            // Everything else goes to the input box, unless a request is in
            // flight: the input is disabled while waiting.
            key_event if self.input_focused && !pending => {
                self.address_input.input(key_event);
            }

            _ => {}
        }

        Ok(())
    }

    /// The typed address as a single line.
    fn current_address(&self) -> String {
        self.address_input.lines().join(" ")
    }

    /// Render the application UI.
    fn render(&mut self) -> Result<()> {
        let current_view = &self.current_view;
        let input_focused = self.input_focused;
        let report_scroll = self.report_scroll;
        let show_help = self.show_help;
        let status_line = &self.status_line;
        let throbber_state = &mut self.throbber_state;
        let address_input = &mut self.address_input;

        self.terminal
            .draw(|frame| {
                view::render_frame(
                    frame,
                    current_view,
                    address_input,
                    input_focused,
                    report_scroll,
                    throbber_state,
                    status_line,
                    show_help,
                );
            })
            .context("Failed to draw frame")?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore the terminal no matter how we exit
        let _ = disable_raw_mode();
    }
}

fn new_address_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text("Enter a Paris address (Enter to analyze)");
    input.set_cursor_line_style(ratatui::style::Style::default());
    input
}
