//! HTTP client for the correlation service.
//!
//! One call per invocation, no retries, no caching. Failures are folded into
//! [`CorrelationApiError`]: a non-2xx answer becomes `Api` (with the
//! service's `detail` when it sent one), anything that leaves us without a
//! decodable response becomes `Network`.

use corrcalc_core::{CorrelationOutcome, CorrelationRequest, CorrelationType, ServiceInfo};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{ApiConfig, ConfigError};
use crate::error::{CorrelationApiError, API_FALLBACK_MESSAGE};

/// Error body sent with non-2xx responses.
#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts the service's `detail` string, or the generic fallback.
pub fn api_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.detail)
        .and_then(|d| d.as_str().map(str::to_string))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| API_FALLBACK_MESSAGE.to_string())
}

pub struct CorrelationClient {
    base_url: String,
    http: Client,
}

impl CorrelationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = Client::builder()
            .build()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Asks the service for the coefficient(s) selected by `kind`.
    ///
    /// The returned variant always matches `kind`.
    pub async fn calculate(
        &self,
        kind: CorrelationType,
        array_x: &[f64],
        array_y: &[f64],
    ) -> Result<CorrelationOutcome, CorrelationApiError> {
        let url = self.url(kind.endpoint());
        let request = CorrelationRequest::new(array_x, array_y);
        debug!(url = %url, points = array_x.len(), kind = %kind, "Sending correlation request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %url, "Correlation service unreachable");
                CorrelationApiError::network()
            })?;

        let body = read_success_body(response).await?;
        let outcome = CorrelationOutcome::from_json(kind, &body).map_err(|e| {
            warn!(error = %e, kind = %kind, "Malformed correlation response");
            CorrelationApiError::network()
        })?;

        info!(kind = %kind, points = array_x.len(), "Correlation received");
        Ok(outcome)
    }

    /// Fetches the service descriptor from `GET /`.
    pub async fn service_info(&self) -> Result<ServiceInfo, CorrelationApiError> {
        let url = self.url("/");
        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, url = %url, "Correlation service unreachable");
            CorrelationApiError::network()
        })?;

        let body = read_success_body(response).await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Malformed service descriptor");
            CorrelationApiError::network()
        })
    }
}

/// Returns the body of a 2xx response, or the translated error.
async fn read_success_body(response: Response) -> Result<Vec<u8>, CorrelationApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        warn!(error = %e, status = status.as_u16(), "Failed to read response body");
        CorrelationApiError::network()
    })?;

    if !status.is_success() {
        let message = api_error_message(&body);
        warn!(status = status.as_u16(), message = %message, "Correlation service rejected request");
        return Err(CorrelationApiError::Api {
            message,
            status: status.as_u16(),
        });
    }

    Ok(body.to_vec())
}
