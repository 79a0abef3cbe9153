//! Application state definitions

use super::forms::ProfileForm;

/// Modal acknowledgment shown at the end of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Submitted,
    SomethingWentWrong,
}

impl Acknowledgment {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::SomethingWentWrong => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::SomethingWentWrong => "Something went wrong while submitting the form!",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The profile form
    pub form: ProfileForm,
    /// Acknowledgment waiting to be dismissed
    pub acknowledgment: Option<Acknowledgment>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    /// Endpoint the form posts to, for display
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.acknowledgment.is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.acknowledgment = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_no_dialog() {
        let state = AppState::default();
        assert!(!state.has_dialog());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_dismiss_dialog() {
        let mut state = AppState::new("http://127.0.0.1:3000/api/form");
        state.acknowledgment = Some(Acknowledgment::Submitted);
        assert!(state.has_dialog());
        state.dismiss_dialog();
        assert!(!state.has_dialog());
        assert_eq!(state.endpoint, "http://127.0.0.1:3000/api/form");
    }

    #[test]
    fn test_acknowledgment_messages() {
        assert_eq!(
            Acknowledgment::Submitted.message(),
            "Form submitted successfully!"
        );
        assert_eq!(
            Acknowledgment::SomethingWentWrong.message(),
            "Something went wrong while submitting the form!"
        );
    }
}
