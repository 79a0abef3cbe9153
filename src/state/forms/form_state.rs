//! Form controller: field values, field errors and the submit state machine

use super::field::{FieldName, FormField};
use super::schema::{ValidationSchema, PROFILE_SCHEMA};
use super::values::{FieldErrors, FormCandidate, FormValues};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// Local validation failed; no request was made
    ValidationFailed,
    /// A request is in flight
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Phases that end a submit attempt; the next edit returns to `Idle`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ValidationFailed | Self::Succeeded | Self::Failed)
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// A previous submission has not finished yet
    Blocked,
    /// Validation failed with this many field errors
    Invalid(usize),
    /// Validation passed; the values are ready to be sent
    Ready(FormValues),
}

/// What the submission routine reported back
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The server accepted the form
    Accepted,
    /// The server rejected individual fields
    Rejected(Vec<(FieldName, String)>),
    /// Transport or unexpected failure
    Failed(String),
}

/// The developer profile form
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub email: FormField,
    pub github_url: FormField,
    pub years_of_experience: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    /// 0-4 are the fields, 5 is the submit button
    pub active_field_index: usize,
    errors: FieldErrors,
    phase: SubmitPhase,
    submit_count: u32,
    schema: &'static ValidationSchema,
}

/// Index of the submit button row
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            email: FormField::new(FieldName::Email),
            github_url: FormField::new(FieldName::GithubUrl),
            years_of_experience: FormField::new(FieldName::YearsOfExperience),
            password: FormField::new(FieldName::Password),
            confirm_password: FormField::new(FieldName::ConfirmPassword),
            active_field_index: 0,
            errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            submit_count: 0,
            schema: &PROFILE_SCHEMA,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::GithubUrl => &self.github_url,
            FieldName::YearsOfExperience => &self.years_of_experience,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::GithubUrl => &mut self.github_url,
            FieldName::YearsOfExperience => &mut self.years_of_experience,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Wire an input to a field; edits made through the binding update the form
    pub fn register_field(&mut self, name: FieldName) -> FieldBinding<'_> {
        FieldBinding { form: self, name }
    }

    /// The field under the cursor, `None` when the submit button is selected
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn set_field_error(&mut self, name: FieldName, message: impl Into<String>) {
        self.errors.set(name, message);
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Current raw input, with the numeric field coerced
    pub fn candidate(&self) -> FormCandidate {
        FormCandidate {
            email: self.email.as_text().to_string(),
            github_url: self.github_url.as_text().to_string(),
            years_of_experience: self.years_of_experience.as_number(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
        }
    }

    /// Run the submit handler up to the network boundary
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Blocked;
        }

        self.submit_count += 1;
        self.errors.clear();
        self.phase = SubmitPhase::Validating;

        match self.schema.validate(&self.candidate()) {
            Ok(values) => {
                self.phase = SubmitPhase::Submitting;
                SubmitAttempt::Ready(values)
            }
            Err(errors) => {
                let count = errors.len();
                self.errors = errors;
                self.phase = SubmitPhase::ValidationFailed;
                SubmitAttempt::Invalid(count)
            }
        }
    }

    /// Apply what the submission routine reported
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Accepted => {
                self.phase = SubmitPhase::Succeeded;
            }
            SubmissionOutcome::Rejected(entries) => {
                for (name, message) in entries {
                    self.set_field_error(*name, message.clone());
                }
                self.phase = SubmitPhase::Failed;
            }
            SubmissionOutcome::Failed(_) => {
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Clear values, errors and submit history.
    /// Refused while a request is in flight; returns whether the form was cleared.
    pub fn reset(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        for name in FieldName::ALL {
            self.field_mut(name).set_value(String::new());
        }
        self.errors.clear();
        self.submit_count = 0;
        self.active_field_index = 0;
        self.phase = SubmitPhase::Idle;
        true
    }

    fn on_change(&mut self, name: FieldName) {
        if self.phase.is_terminal() {
            self.phase = SubmitPhase::Idle;
        }
        if self.submit_count == 0 {
            return;
        }

        self.revalidate(name);
        if name == FieldName::Password {
            self.revalidate(FieldName::ConfirmPassword);
        }
    }

    fn revalidate(&mut self, name: FieldName) {
        match self.schema.validate_field(&self.candidate(), name) {
            Some(message) => self.errors.set(name, message),
            None => {
                self.errors.remove(name);
            }
        }
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // five fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::from_index(index).map(|name| self.field(name))
    }
}

/// Wiring between an input and the form's value store
pub struct FieldBinding<'a> {
    form: &'a mut ProfileForm,
    name: FieldName,
}

impl FieldBinding<'_> {
    pub fn on_input(&mut self, c: char) {
        if self.form.field_mut(self.name).push_char(c) {
            self.form.on_change(self.name);
        }
    }

    pub fn on_backspace(&mut self) {
        if self.form.field_mut(self.name).pop_char() {
            self.form.on_change(self.name);
        }
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.form.field_mut(self.name).set_value(value);
        self.form.on_change(self.name);
    }
}
