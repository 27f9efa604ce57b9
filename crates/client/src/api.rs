//! HTTP client for the address analysis service.
//!
//! Every transport-level failure (non-2xx status, network error, timeout,
//! undecodable body) is normalized to an [`ApiError`] carrying a
//! human-readable message, so callers never have to interpret raw reqwest
//! errors. A non-2xx response with a structured `{"error": "..."}` body uses
//! the service's own message; anything else falls back to a fixed generic
//! message per endpoint.

use anyhow::{Context, Result};
use quartier_common::{AnalysisResult, CompareResult, ErrorBody};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Upper bound on a single analysis call. The upstream pipeline chains
/// geocoding, content analysis and transit lookups, so a full minute is
/// normal for a cold address.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The two service endpoints this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Analyze,
    Compare,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Analyze => "/api/analyze",
            Endpoint::Compare => "/api/compare",
        }
    }

    /// Generic message shown when the service gives us nothing better.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Endpoint::Analyze => "Failed to analyze address",
            Endpoint::Compare => "Failed to compare addresses",
        }
    }
}

/// Normalized transport failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status. `message` is the
    /// service-provided error text, or the endpoint fallback if the body had
    /// no usable `{"error": ...}` shape.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The request exceeded the client timeout.
    #[error("{fallback}: request timed out")]
    Timeout { fallback: &'static str },

    /// The service could not be reached at all.
    #[error("{fallback}")]
    Network {
        fallback: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body does not decode into the expected payload.
    /// This is a contract bug on the service side, not an absence.
    #[error("{fallback}")]
    Contract { fallback: &'static str, detail: String },
}

impl ApiError {
    /// Banner text for the user. Service messages pass through verbatim;
    /// everything else resolves to the endpoint's generic fallback.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    address: &'a str,
}

#[derive(Serialize)]
struct CompareRequest<'a> {
    address1: &'a str,
    address2: &'a str,
}

/// HTTP client for the analysis service, with connection pooling and a fixed
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: String,
    client: Client,
}

impl AnalysisClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout. Used by tests to
    /// exercise the timeout path without waiting a minute.
    #[instrument(skip_all, fields(base_url = %base_url, timeout_secs = timeout.as_secs()))]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .context("Failed to build HTTP client")?;

        info!("Initialized analysis client: base_url={}", base_url);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a full analysis of one address.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn analyze(&self, address: &str) -> Result<AnalysisResult, ApiError> {
        self.post_json(Endpoint::Analyze, &AnalyzeRequest { address })
            .await
    }

    /// Request a comparison of two addresses.
    #[instrument(skip(self))]
    pub async fn compare(
        &self,
        address1: &str,
        address2: &str,
    ) -> Result<CompareResult, ApiError> {
        self.post_json(Endpoint::Compare, &CompareRequest { address1, address2 })
            .await
    }

    /// Liveness probe against the service root. Startup calls this to warn
    /// early about a misconfigured URL; failures are not fatal.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Analysis service unreachable")?;

        if !response.status().is_success() {
            anyhow::bail!("Analysis service health check failed: status {}", response.status());
        }

        debug!("Analysis service health check passed");
        Ok(())
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify_send_error(e, endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => endpoint.fallback_message().to_string(),
            };
            warn!(status = status.as_u16(), message = %message, "service returned error");
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| classify_send_error(e, endpoint))?;

        match serde_json::from_str(&text) {
            Ok(payload) => {
                info!(endpoint = endpoint.path(), "request completed");
                Ok(payload)
            }
            Err(e) => {
                error!(endpoint = endpoint.path(), detail = %e, "undecodable 2xx payload");
                Err(ApiError::Contract {
                    fallback: endpoint.fallback_message(),
                    detail: e.to_string(),
                })
            }
        }
    }
}

fn classify_send_error(err: reqwest::Error, endpoint: Endpoint) -> ApiError {
    if err.is_timeout() {
        warn!(endpoint = endpoint.path(), "request timed out");
        ApiError::Timeout {
            fallback: endpoint.fallback_message(),
        }
    } else {
        warn!(endpoint = endpoint.path(), error = %err, "request failed to send");
        ApiError::Network {
            fallback: endpoint.fallback_message(),
            source: err,
        }
    }
}
