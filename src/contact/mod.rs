//! Contact form domain: values, validation and the submission pipeline

mod pipeline;
mod validation;
mod values;

pub use pipeline::{DeliveryPayload, SubmissionOutcome, SubmissionPipeline};
pub use validation::validate;
pub use values::{text_len, ContactField, ContactFormValues, FieldErrors};
