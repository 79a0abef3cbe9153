//! Form API module for HTTP communication

mod client;
mod error;
mod submission;
mod traits;
mod types;

pub use client::{FormClient, FORM_PATH};
pub use error::SubmitError;
pub use submission::submit_profile;
pub use traits::FormApiTrait;

#[cfg(test)]
pub use traits::MockFormApiTrait;
#[cfg(test)]
pub use types::FormResponse;
