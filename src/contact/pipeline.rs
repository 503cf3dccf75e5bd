//! Validate-then-deliver submission pipeline

use super::validation::validate;
use super::values::{ContactFormValues, FieldErrors};
use crate::relay::MessageRelay;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Template parameters handed to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    ValidationFailed(FieldErrors),
    /// The relay failed. `reason` is for diagnostics, not for display.
    DeliveryFailed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Runs validation and hands valid messages to the relay.
///
/// Cheap to clone; clones share the same relay.
#[derive(Clone)]
pub struct SubmissionPipeline {
    relay: Arc<dyn MessageRelay>,
    recipient: String,
}

impl SubmissionPipeline {
    pub fn new(relay: Arc<dyn MessageRelay>, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            recipient: recipient.into(),
        }
    }

    /// Validate values and build the payload. Performs no I/O.
    pub fn prepare(&self, values: &ContactFormValues) -> Result<DeliveryPayload, FieldErrors> {
        let contact = validate(values)?;
        Ok(DeliveryPayload {
            from_name: contact.name,
            from_email: contact.email,
            subject: contact.subject,
            message: contact.message,
            to_name: self.recipient.clone(),
        })
    }

    /// Hand a prepared payload to the relay. Never retries.
    pub async fn deliver(&self, payload: DeliveryPayload) -> SubmissionOutcome {
        let attempt_id = Uuid::new_v4();
        tracing::info!(%attempt_id, subject = %payload.subject, "Delivering contact message");

        match self.relay.send(&payload).await {
            Ok(()) => {
                tracing::info!(%attempt_id, "Contact message delivered");
                SubmissionOutcome::Success
            }
            Err(e) => {
                tracing::error!(%attempt_id, error = %e, "Contact message delivery failed");
                SubmissionOutcome::DeliveryFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Validate and deliver in one step
    pub async fn submit(&self, values: &ContactFormValues) -> SubmissionOutcome {
        match self.prepare(values) {
            Ok(payload) => self.deliver(payload).await,
            Err(errors) => {
                tracing::debug!(fields = %errors, "Contact form failed validation");
                SubmissionOutcome::ValidationFailed(errors)
            }
        }
    }
}
