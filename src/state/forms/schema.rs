//! Validation schema for the profile form
//!
//! Every field is checked independently and all failures are collected,
//! so the user sees each problem after a single submit.

use super::field::FieldName;
use super::values::{FieldErrors, FormCandidate, FormValues};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Declarative per-field constraints
#[derive(Debug)]
pub struct ValidationSchema {
    pub years_of_experience: RangeInclusive<f64>,
    pub password_min_len: usize,
    pub password_max_len: usize,
}

/// The schema the profile form is validated against
pub static PROFILE_SCHEMA: ValidationSchema = ValidationSchema {
    years_of_experience: 1.0..=10.0,
    password_min_len: 8,
    password_max_len: 20,
};

impl ValidationSchema {
    /// Validate the whole candidate, collecting every field failure
    pub fn validate(&self, candidate: &FormCandidate) -> Result<FormValues, FieldErrors> {
        let errors: FieldErrors = FieldName::ALL
            .into_iter()
            .filter_map(|name| self.validate_field(candidate, name).map(|msg| (name, msg)))
            .collect();

        match candidate.years_of_experience {
            Some(years) if errors.is_empty() => Ok(FormValues {
                email: candidate.email.clone(),
                github_url: candidate.github_url.clone(),
                years_of_experience: years,
                password: candidate.password.clone(),
                confirm_password: candidate.confirm_password.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate a single field; returns the error message on failure
    pub fn validate_field(&self, candidate: &FormCandidate, name: FieldName) -> Option<String> {
        match name {
            FieldName::Email => {
                (!is_valid_email(&candidate.email)).then(|| "Invalid email".to_string())
            }
            FieldName::GithubUrl => {
                (!is_valid_url(&candidate.github_url)).then(|| "Invalid url".to_string())
            }
            FieldName::YearsOfExperience => self.check_years(candidate.years_of_experience),
            FieldName::Password => self.check_password(&candidate.password),
            FieldName::ConfirmPassword => (candidate.confirm_password != candidate.password)
                .then(|| "Passwords do not match".to_string()),
        }
    }

    fn check_years(&self, years: Option<f64>) -> Option<String> {
        let Some(years) = years else {
            return Some("Expected number, received nan".to_string());
        };
        let (min, max) = (
            *self.years_of_experience.start(),
            *self.years_of_experience.end(),
        );
        if years < min {
            Some(format!("Number must be greater than or equal to {min}"))
        } else if years > max {
            Some(format!("Number must be less than or equal to {max}"))
        } else {
            None
        }
    }

    fn check_password(&self, password: &str) -> Option<String> {
        let len = password.chars().count();
        if len < self.password_min_len {
            Some("Password is too short".to_string())
        } else if len > self.password_max_len {
            Some("Password is too long".to_string())
        } else {
            None
        }
    }
}

/// Syntactic email check (no leading dot, no consecutive dots)
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// An absolute URL that parses
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}
