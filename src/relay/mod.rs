//! Message relay module for delivering contact messages

mod client;
mod traits;

pub use client::{EmailJsRelay, RelayError};
pub use traits::MessageRelay;

#[cfg(test)]
pub use traits::MockMessageRelay;
