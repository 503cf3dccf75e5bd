//! Contact form validation
//!
//! Every field is checked independently and all failures are reported
//! together, one message per field.

use super::values::{text_len, ContactField, ContactFormValues, FieldErrors, ValidatedContact};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check an address against the email grammar. No DNS lookups.
pub fn is_valid_email(address: &str) -> bool {
    !address.starts_with('.') && !address.contains("..") && EMAIL_PATTERN.is_match(address)
}

/// Validate raw form values.
///
/// Returns the trimmed values, or a [`FieldErrors`] holding one message for
/// every failing field.
pub fn validate(values: &ContactFormValues) -> Result<ValidatedContact, FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in ContactField::ALL {
        if let Some(message) = check_field(field, values.get(field).trim()) {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedContact {
        name: values.name.trim().to_string(),
        email: values.email.trim().to_string(),
        subject: values.subject.trim().to_string(),
        message: values.message.trim().to_string(),
    })
}

/// Returns the error message for a single trimmed value, if any
fn check_field(field: ContactField, value: &str) -> Option<&'static str> {
    let too_long = text_len(value) > field.max_len();

    match field {
        // Format and length can both fail here; the length message wins.
        ContactField::Email if too_long => Some("Email must be less than 255 characters"),
        ContactField::Email if !is_valid_email(value) => Some("Invalid email address"),
        ContactField::Email => None,
        ContactField::Name if value.is_empty() => Some("Name is required"),
        ContactField::Name if too_long => Some("Name must be less than 100 characters"),
        ContactField::Subject if value.is_empty() => Some("Subject is required"),
        ContactField::Subject if too_long => Some("Subject must be less than 200 characters"),
        ContactField::Message if value.is_empty() => Some("Message is required"),
        ContactField::Message if too_long => Some("Message must be less than 1000 characters"),
        _ => None,
    }
}
