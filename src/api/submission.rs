//! Submission routine: format validated values, post them, interpret the reply

use super::traits::FormApiTrait;
use super::types::SubmissionPayload;
use crate::state::{FormValues, SubmissionOutcome};

/// Post the validated form once and classify the response
pub async fn submit_profile<C>(api: &C, values: &FormValues) -> SubmissionOutcome
where
    C: FormApiTrait + ?Sized,
{
    let payload = SubmissionPayload::from(values);
    tracing::debug!(
        email = %payload.email,
        github_url = %payload.github_url,
        years_of_experience = payload.years_of_experience,
        "Submitting form"
    );

    match api.post_form(&payload).await {
        Ok(response) if !response.has_errors() => {
            tracing::info!("Form accepted by server");
            SubmissionOutcome::Accepted
        }
        Ok(response) => {
            let errors = response.field_errors();
            if errors.is_empty() {
                tracing::error!("Server reported errors only for fields the form does not have");
                SubmissionOutcome::Failed("server reported errors for unknown fields".to_string())
            } else {
                tracing::debug!("Server rejected {} field(s)", errors.len());
                SubmissionOutcome::Rejected(errors)
            }
        }
        Err(err) => {
            tracing::error!("Form submission failed: {err}");
            SubmissionOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FormResponse, MockFormApiTrait, SubmitError};
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample_values() -> FormValues {
        FormValues {
            email: "a@b.com".to_string(),
            github_url: "https://github.com/a".to_string(),
            years_of_experience: 5.0,
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_formatted_payload_once() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form()
            .withf(|payload| {
                serde_json::to_value(payload).unwrap()
                    == json!({
                        "email": "a@b.com",
                        "githubUrl": "https://github.com/a",
                        "yearsOfExperience": 5,
                        "password": "Secret123",
                        "confirmPassword": "Secret123",
                    })
            })
            .times(1)
            .returning(|_| Ok(FormResponse::default()));

        let outcome = submit_profile(&api, &sample_values()).await;
        assert_eq!(outcome, SubmissionOutcome::Accepted);
    }

    #[tokio::test]
    async fn test_empty_error_map_is_success() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form().times(1).returning(|_| {
            Ok(FormResponse {
                errors: Some(BTreeMap::new()),
            })
        });

        let outcome = submit_profile(&api, &sample_values()).await;
        assert_eq!(outcome, SubmissionOutcome::Accepted);
    }

    #[tokio::test]
    async fn test_field_errors_are_rejections() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form().times(1).returning(|_| {
            Ok(FormResponse {
                errors: Some(BTreeMap::from([(
                    "email".to_string(),
                    "already taken".to_string(),
                )])),
            })
        });

        let outcome = submit_profile(&api, &sample_values()).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(vec![(FieldName::Email, "already taken".to_string())])
        );
    }

    #[tokio::test]
    async fn test_only_unknown_fields_is_failure() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form().times(1).returning(|_| {
            Ok(FormResponse {
                errors: Some(BTreeMap::from([("username".to_string(), "taken".to_string())])),
            })
        });

        let outcome = submit_profile(&api, &sample_values()).await;
        assert!(matches!(outcome, SubmissionOutcome::Failed(_)), "{outcome:?}");
    }

    #[tokio::test]
    async fn test_unknown_fields_alongside_known_ones_are_rejections() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form().times(1).returning(|_| {
            Ok(FormResponse {
                errors: Some(BTreeMap::from([
                    ("username".to_string(), "taken".to_string()),
                    ("password".to_string(), "too weak".to_string()),
                ])),
            })
        });

        let outcome = submit_profile(&api, &sample_values()).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(vec![(FieldName::Password, "too weak".to_string())])
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_failure() {
        let mut api = MockFormApiTrait::new();
        api.expect_post_form().times(1).returning(|_| {
            Err(SubmitError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        });

        let outcome = submit_profile(&api, &sample_values()).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("HTTP 503: unavailable".to_string())
        );
    }
}
