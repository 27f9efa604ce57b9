//! Request lifecycle state machine.
//!
//! One controller instance exists per session and owns the only mutable
//! request state. All four UI situations (nothing yet, waiting, report,
//! error banner) are variants of a single enum, so combinations like
//! "loading and showing an error" cannot be expressed at all.

use quartier_common::AnalysisResult;
use tracing::{debug, info};

/// Lifecycle of the current analysis request.
#[derive(Debug, Clone)]
pub enum RequestState {
    /// No request submitted since start or last reset.
    Idle,
    /// Exactly one request is in flight for this address.
    Pending { address: String },
    /// The service answered; the payload may still be arbitrarily sparse.
    Succeeded { result: AnalysisResult },
    /// The request settled with an error; `message` is already
    /// user-presentable.
    Failed { message: String },
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }
}

/// What `submit` did with the given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted. The caller must issue exactly one outbound call with this
    /// address and later settle the controller with `complete` or `fail`.
    Dispatched { address: String },
    /// Blank input. Absorbed silently: no transition, no message.
    RejectedBlank,
    /// A request is already in flight. Absorbed silently.
    RejectedInFlight,
}

/// Owns and advances the [`RequestState`].
#[derive(Debug, Default)]
pub struct RequestController {
    state: RequestState,
}

impl Default for RequestState {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Accept an address for analysis.
    ///
    /// Rejected without any state change when the trimmed input is empty or
    /// when a request is already pending. Otherwise any prior result or
    /// error is discarded and the state moves to `Pending` carrying the raw
    /// (untrimmed) address, which is also what goes on the wire.
    pub fn submit(&mut self, address: &str) -> SubmitOutcome {
        if address.trim().is_empty() {
            debug!("blank address submitted, ignoring");
            return SubmitOutcome::RejectedBlank;
        }

        if self.state.is_pending() {
            debug!("submit while a request is in flight, ignoring");
            return SubmitOutcome::RejectedInFlight;
        }

        let address = address.to_string();
        info!(address = %address, "analysis request dispatched");
        self.state = RequestState::Pending {
            address: address.clone(),
        };

        SubmitOutcome::Dispatched { address }
    }

    /// Settle the pending request with a payload.
    ///
    /// A completion arriving in any other state is stale (the session was
    /// reset while the call was in flight) and is dropped.
    pub fn complete(&mut self, result: AnalysisResult) {
        if !self.state.is_pending() {
            debug!("dropping stale completion");
            return;
        }
        info!("analysis request succeeded");
        self.state = RequestState::Succeeded { result };
    }

    /// Settle the pending request with a user-presentable error message.
    /// Stale failures are dropped like stale completions.
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.state.is_pending() {
            debug!("dropping stale failure");
            return;
        }
        let message = message.into();
        info!(message = %message, "analysis request failed");
        self.state = RequestState::Failed { message };
    }

    /// Unconditionally return to `Idle`, discarding any held result or
    /// error. The only way back to the empty form from a settled request.
    pub fn reset(&mut self) {
        debug!("controller reset");
        self.state = RequestState::Idle;
    }
}
