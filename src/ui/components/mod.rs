//! Reusable UI components

mod button;
mod dialog;
mod text;
mod toast;

pub use button::{nav_button_width, render_button, render_nav_button, BUTTON_HEIGHT};
pub use dialog::{render_dialog, DialogConfig};
pub use text::{heading, muted, push_wrapped, tags, wrap_text};
pub use toast::render_toasts;
