//! Trait abstraction for the form API to enable mocking in tests

use super::error::SubmitError;
use super::types::{FormResponse, SubmissionPayload};
use async_trait::async_trait;

/// Trait for form endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormApiTrait: Send + Sync {
    /// Post the form once and return the parsed response
    async fn post_form(&self, payload: &SubmissionPayload) -> Result<FormResponse, SubmitError>;
}
