//! Form rendering module
//!
//! - `field_renderer`: one labeled input with its inline error
//! - `profile_form`: the developer profile form

mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_form;
