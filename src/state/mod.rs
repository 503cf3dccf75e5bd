//! Application state module

mod app_state;
mod forms;
mod route;
mod scroll;
mod splash_state;
mod toast;

pub use app_state::*;
pub use forms::*;
pub use route::*;
pub use splash_state::*;
pub use toast::*;
