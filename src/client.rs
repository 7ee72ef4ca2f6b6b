//! Blocking HTTP client for the prediction service.
//!
//! Native builds only (`client` feature); the wasm front end talks to the
//! service through the browser's own fetch instead. No retries, timeouts,
//! or caching: a failed call is terminal for that attempt and a new user
//! action starts the next one.

use crate::error::DtiError;
use crate::model::{PredictionQuery, PredictionResult, ServiceDetail, TargetList};

/// Default service base URL. The page and the service share an origin in
/// production, so this constant is the only configuration; tests and local
/// setups override it through [`PredictionClient::new`].
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Client for the two service endpoints.
#[derive(Debug)]
pub struct PredictionClient {
    agent: ureq::Agent,
    base: String,
}

impl PredictionClient {
    /// Client against `base` (no trailing slash).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        // Non-success responses carry a JSON `{detail}` body we still want
        // to read, so status errors are handled here rather than by the
        // agent.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.new_agent(),
            base: base.into(),
        }
    }

    /// Client against [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn with_default_base() -> Self {
        Self::new(DEFAULT_API_BASE)
    }

    /// Fetch the full target catalog (`GET /target-info`).
    ///
    /// # Errors
    ///
    /// [`DtiError::CatalogLoad`] on transport failure, a non-success
    /// status, or an undecodable payload.
    pub fn fetch_targets(&self) -> Result<TargetList, DtiError> {
        let url = format!("{}/target-info", self.base);
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| DtiError::CatalogLoad(e.to_string()))?;
        let body = read_success_body(response).map_err(|e| match e {
            ReadError::Transport(msg) | ReadError::Status(msg) => {
                DtiError::CatalogLoad(msg)
            }
        })?;
        serde_json::from_str(&body)
            .map_err(|e| DtiError::CatalogLoad(e.to_string()))
    }

    /// Run one prediction (`POST /predict`).
    ///
    /// # Errors
    ///
    /// [`DtiError::Network`] on transport failure or an undecodable
    /// success payload; [`DtiError::Service`] when the service answers with
    /// a non-success status and a `{detail}` body.
    pub fn predict(
        &self,
        query: &PredictionQuery,
    ) -> Result<PredictionResult, DtiError> {
        let url = format!("{}/predict", self.base);
        let body = serde_json::to_string(query)
            .map_err(|e| DtiError::Network(e.to_string()))?;
        log::debug!("POST {url} target={}", query.target);
        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(body.as_str())
            .map_err(|e| DtiError::Network(e.to_string()))?;
        let body = read_success_body(response).map_err(|e| match e {
            ReadError::Transport(msg) => DtiError::Network(msg),
            ReadError::Status(detail) => DtiError::Service { detail },
        })?;
        serde_json::from_str(&body).map_err(|e| DtiError::Network(e.to_string()))
    }
}

/// Failure while reading a response body.
enum ReadError {
    /// The body could not be read at all.
    Transport(String),
    /// The status was non-success; carries the service's `detail` text.
    Status(String),
}

/// Read the body of a response, mapping non-success statuses to the
/// service's `detail` field (falling back to the status line when the body
/// is not that shape).
fn read_success_body(
    response: ureq::http::Response<ureq::Body>,
) -> Result<String, ReadError> {
    let status = response.status();
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| ReadError::Transport(e.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        let detail = serde_json::from_str::<ServiceDetail>(&body)
            .map_or_else(|_| format!("HTTP {status}"), |d| d.detail);
        Err(ReadError::Status(detail))
    }
}
