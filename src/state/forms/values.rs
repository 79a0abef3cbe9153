//! Candidate, validated and error-map types for the profile form

use super::field::FieldName;
use std::collections::BTreeMap;

/// Raw form input as read from the fields, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormCandidate {
    pub email: String,
    pub github_url: String,
    /// `None` when the numeric input does not hold a number
    pub years_of_experience: Option<f64>,
    pub password: String,
    pub confirm_password: String,
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub email: String,
    pub github_url: String,
    pub years_of_experience: f64,
    pub password: String,
    pub confirm_password: String,
}

/// Field name -> human readable error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.0.get(&name).map(String::as_str)
    }

    pub fn set(&mut self, name: FieldName, message: impl Into<String>) {
        self.0.insert(name, message.into());
    }

    pub fn remove(&mut self, name: FieldName) -> Option<String> {
        self.0.remove(&name)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in field display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(name, msg)| (*name, msg.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_message() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Email, "Invalid email");
        errors.set(FieldName::Email, "already taken");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some("already taken"));
    }

    #[test]
    fn test_iter_follows_display_order() {
        let errors: FieldErrors = [
            (FieldName::ConfirmPassword, "b".to_string()),
            (FieldName::Email, "a".to_string()),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = errors.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec![FieldName::Email, FieldName::ConfirmPassword]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Password, "Password is too short");
        errors.set(FieldName::GithubUrl, "Invalid url");
        assert_eq!(
            errors.remove(FieldName::Password),
            Some("Password is too short".to_string())
        );
        assert!(errors.get(FieldName::Password).is_none());
        errors.clear();
        assert!(errors.is_empty());
    }
}
