//! Platform-specific configuration

/// Send shortcut display for the contact form hints.
/// Ctrl+S works on all platforms.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Label for the copy action in the contact pane
#[cfg(target_os = "macos")]
pub const COPY_HINT: &str = "y:copy to pasteboard";

#[cfg(not(target_os = "macos"))]
pub const COPY_HINT: &str = "y:copy";
