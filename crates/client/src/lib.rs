//! HTTP client for the analysis service and the request lifecycle state
//! machine that front-ends drive.

pub mod api;
pub mod controller;

pub use api::{AnalysisClient, ApiError, Endpoint, DEFAULT_REQUEST_TIMEOUT};
pub use controller::{RequestController, RequestState, SubmitOutcome};
