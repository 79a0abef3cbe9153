//! Shortcut labels shown in the status bar
//!
//! Terminals deliver Cmd combinations inconsistently on macOS, so the
//! form binds Ctrl on every platform.

/// Submit from any field
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear every field and error
pub const RESET_SHORTCUT: &str = "Ctrl+R";
