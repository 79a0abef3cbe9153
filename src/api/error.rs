//! Form API error types

/// Errors that can occur while posting the form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status without a usable field error map.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured server URL cannot be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
