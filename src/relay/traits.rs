//! Trait abstraction for the message relay to enable mocking in tests

use super::RelayError;
use crate::contact::DeliveryPayload;
use async_trait::async_trait;

/// Delivers a contact message to the site owner.
///
/// Implementations report success or failure only; what happens on the other
/// side is opaque.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Send one message
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), RelayError>;
}
