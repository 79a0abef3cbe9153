//! Wire types for the form endpoint

use crate::state::{FieldName, FormValues};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// JSON body posted to the form endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub email: String,
    pub github_url: String,
    #[serde(serialize_with = "serialize_number")]
    pub years_of_experience: f64,
    pub password: String,
    pub confirm_password: String,
}

impl From<&FormValues> for SubmissionPayload {
    fn from(values: &FormValues) -> Self {
        Self {
            email: values.email.clone(),
            github_url: values.github_url.clone(),
            years_of_experience: values.years_of_experience,
            password: values.password.to_string(),
            confirm_password: values.confirm_password.to_string(),
        }
    }
}

/// Whole numbers go out as JSON integers (`5`, not `5.0`)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Response body of the form endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormResponse {
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl FormResponse {
    /// Whether the server reported any error at all, known field or not
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Server errors for fields the form knows about.
    /// Unknown keys are logged and dropped.
    pub fn field_errors(&self) -> Vec<(FieldName, String)> {
        let Some(errors) = &self.errors else {
            return Vec::new();
        };

        errors
            .iter()
            .filter_map(|(key, message)| match FieldName::from_wire(key) {
                Some(name) => Some((name, message.clone())),
                None => {
                    tracing::warn!("Ignoring server error for unknown field {key:?}: {message}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_values() -> FormValues {
        FormValues {
            email: "a@b.com".to_string(),
            github_url: "https://github.com/a".to_string(),
            years_of_experience: 5.0,
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_wire_shape() {
            let payload = SubmissionPayload::from(&sample_values());
            assert_eq!(
                serde_json::to_value(&payload).unwrap(),
                json!({
                    "email": "a@b.com",
                    "githubUrl": "https://github.com/a",
                    "yearsOfExperience": 5,
                    "password": "Secret123",
                    "confirmPassword": "Secret123",
                })
            );
        }

        #[test]
        fn test_whole_years_serialize_as_integer() {
            let payload = SubmissionPayload::from(&sample_values());
            let body = serde_json::to_string(&payload).unwrap();
            assert!(body.contains(r#""yearsOfExperience":5,"#), "{body}");
        }

        #[test]
        fn test_fractional_years_serialize_as_float() {
            let values = FormValues {
                years_of_experience: 2.5,
                ..sample_values()
            };
            let payload = SubmissionPayload::from(&values);
            assert_eq!(
                serde_json::to_value(&payload).unwrap()["yearsOfExperience"],
                json!(2.5)
            );
        }
    }

    mod response {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_errors_key() {
            let response: FormResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
            assert_eq!(response.errors, None);
            assert!(!response.has_errors());
            assert!(response.field_errors().is_empty());
        }

        #[test]
        fn test_null_and_empty_errors() {
            let response: FormResponse = serde_json::from_str(r#"{"errors":null}"#).unwrap();
            assert!(!response.has_errors());
            let response: FormResponse = serde_json::from_str(r#"{"errors":{}}"#).unwrap();
            assert!(!response.has_errors());
            assert!(response.field_errors().is_empty());
        }

        #[test]
        fn test_known_field_errors() {
            let response: FormResponse =
                serde_json::from_str(r#"{"errors":{"email":"already taken"}}"#).unwrap();
            assert_eq!(
                response.field_errors(),
                vec![(FieldName::Email, "already taken".to_string())]
            );
        }

        #[test]
        fn test_unknown_keys_are_dropped() {
            let response: FormResponse = serde_json::from_str(
                r#"{"errors":{"username":"taken","githubUrl":"not found"}}"#,
            )
            .unwrap();
            assert!(response.has_errors());
            assert_eq!(
                response.field_errors(),
                vec![(FieldName::GithubUrl, "not found".to_string())]
            );
        }

        #[test]
        fn test_only_unknown_keys_still_report_errors() {
            let response: FormResponse =
                serde_json::from_str(r#"{"errors":{"username":"taken"}}"#).unwrap();
            assert!(response.has_errors());
            assert!(response.field_errors().is_empty());
        }

        #[test]
        fn test_non_string_messages_fail_to_parse() {
            let result = serde_json::from_str::<FormResponse>(r#"{"errors":{"email":["a"]}}"#);
            assert!(result.is_err());
        }
    }
}
