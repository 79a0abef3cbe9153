//! Application state and core logic

use crate::api::{submit_profile, FormApiTrait, FormClient};
use crate::config::FormConfig;
use crate::state::{Acknowledgment, AppState, Form, SubmissionOutcome, SubmitAttempt};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Form endpoint
    api: Arc<dyn FormApiTrait>,
    /// Result of the submission currently in flight
    pending_submission: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &FormConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        tracing::info!("Form endpoint: {endpoint}");
        let state = AppState::new(endpoint.as_str());
        Ok(Self::with_api(state, Arc::new(FormClient::new(endpoint))))
    }

    pub fn with_api(state: AppState, api: Arc<dyn FormApiTrait>) -> Self {
        Self {
            state,
            api,
            pending_submission: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Acknowledgments are modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => {
                let message = if self.state.form.reset() {
                    "Form cleared"
                } else {
                    "Cannot reset while submitting"
                };
                self.state.status_message = Some(message.to_string());
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_submit_button_active() {
                    self.submit();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = self.state.form.active_field_name() {
                    self.state.form.register_field(name).on_backspace();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(name) = self.state.form.active_field_name() {
                    self.state.form.register_field(name).on_input(c);
                }
            }
            _ => {}
        }
    }

    /// Validate the form and, when valid, post it in the background
    pub fn submit(&mut self) {
        match self.state.form.begin_submit() {
            SubmitAttempt::Blocked => {
                self.state.status_message = Some("Submission already in progress".to_string());
            }
            SubmitAttempt::Invalid(count) => {
                tracing::debug!("Form has {count} invalid field(s), not submitting");
                self.state.status_message = None;
            }
            SubmitAttempt::Ready(values) => {
                let api = Arc::clone(&self.api);
                let (tx, rx) = oneshot::channel();
                tokio::spawn(async move {
                    let outcome = submit_profile(api.as_ref(), &values).await;
                    let _ = tx.send(outcome);
                });
                self.pending_submission = Some(rx);
                self.state.status_message = Some("Submitting...".to_string());
            }
        }
    }

    /// Pick up the result of the in-flight submission, if it has arrived
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending_submission.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending_submission = None;
                self.apply_outcome(outcome);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending_submission = None;
                tracing::error!("Submission task ended without a result");
                self.apply_outcome(SubmissionOutcome::Failed(
                    "submission task ended without a result".to_string(),
                ));
            }
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.form.finish_submit(&outcome);
        self.state.status_message = None;
        match outcome {
            SubmissionOutcome::Accepted => {
                self.state.acknowledgment = Some(Acknowledgment::Submitted);
            }
            SubmissionOutcome::Rejected(_) => {
                self.state.status_message =
                    Some("The server rejected some fields".to_string());
            }
            SubmissionOutcome::Failed(_) => {
                self.state.acknowledgment = Some(Acknowledgment::SomethingWentWrong);
            }
        }
    }
}
