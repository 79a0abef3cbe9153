//! Form domain layer
//!
//! Field value objects, the validation schema and the form controller.
//! Rendering lives in `ui::forms`.

mod field;
mod form_state;
mod schema;
mod values;

pub use field::{FieldName, FormField, InputKind};
pub use form_state::{Form, ProfileForm, SubmissionOutcome, SubmitAttempt, SubmitPhase};
pub use values::FormValues;
