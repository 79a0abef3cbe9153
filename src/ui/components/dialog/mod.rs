//! Dialog components for TUI

mod acknowledgment_dialog;
mod base;

pub use acknowledgment_dialog::render_acknowledgment;
