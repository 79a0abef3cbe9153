//! HTTP client for the form endpoint
//!
//! One POST per submit. No retries and no timeout configuration: a
//! failed attempt is reported to the user, who may submit again.

use super::error::SubmitError;
use super::traits::FormApiTrait;
use super::types::{FormResponse, SubmissionPayload};
use async_trait::async_trait;
use url::Url;

/// Path of the form endpoint, relative to the server URL
pub const FORM_PATH: &str = "/api/form";

/// Client for posting the profile form
#[derive(Debug, Clone)]
pub struct FormClient {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl FormClient {
    /// Create a client posting to the given endpoint
    pub fn new(endpoint: Url) -> Self {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    pub fn with_http_client(endpoint: Url, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }
}

#[async_trait]
impl FormApiTrait for FormClient {
    async fn post_form(&self, payload: &SubmissionPayload) -> Result<FormResponse, SubmitError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "Response from server: {body}");

        if status.is_success() {
            return parse_body(&body);
        }

        // Validation failures may come back as 4xx with a field error map
        if status.is_client_error() {
            if let Ok(parsed) = parse_body(&body) {
                if parsed.has_errors() {
                    return Ok(parsed);
                }
            }
        }

        Err(SubmitError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// An empty body counts as a response without errors
fn parse_body(body: &str) -> Result<FormResponse, SubmitError> {
    if body.trim().is_empty() {
        return Ok(FormResponse::default());
    }
    Ok(serde_json::from_str(body)?)
}
