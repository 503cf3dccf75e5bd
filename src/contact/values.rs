//! Contact form value objects

use std::collections::BTreeMap;
use std::fmt;

/// The four fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Stable key used in logs and error maps
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your@email.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project or how I can help...",
        }
    }

    /// Maximum length after trimming, measured by [`text_len`]
    pub fn max_len(&self) -> usize {
        match self {
            Self::Name => 100,
            Self::Email => 255,
            Self::Subject => 200,
            Self::Message => 1000,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Length of a value as counted against the ceilings: UTF-16 code units,
/// so characters outside the Basic Multilingual Plane count twice.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

/// Values that passed validation, already trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field error messages. Only failing fields have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<ContactField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Remove the error for a single field (called when the field is edited)
    pub fn clear_field(&mut self, field: ContactField) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contact_field {
        use super::*;

        #[test]
        fn test_keys_match_form_names() {
            let keys: Vec<_> = ContactField::ALL.iter().map(|f| f.key()).collect();
            assert_eq!(keys, vec!["name", "email", "subject", "message"]);
        }

        #[test]
        fn test_only_message_is_multiline() {
            assert!(ContactField::Message.is_multiline());
            assert!(!ContactField::Name.is_multiline());
            assert!(!ContactField::Email.is_multiline());
            assert!(!ContactField::Subject.is_multiline());
        }

        #[test]
        fn test_ceilings() {
            assert_eq!(ContactField::Name.max_len(), 100);
            assert_eq!(ContactField::Email.max_len(), 255);
            assert_eq!(ContactField::Subject.max_len(), 200);
            assert_eq!(ContactField::Message.max_len(), 1000);
        }
    }

    mod field_errors {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let errors = FieldErrors::default();
            assert!(errors.is_empty());
            assert_eq!(errors.len(), 0);
        }

        #[test]
        fn test_insert_and_get() {
            let mut errors = FieldErrors::new();
            errors.insert(ContactField::Email, "Invalid email address");
            assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
            assert!(errors.get(ContactField::Name).is_none());
        }

        #[test]
        fn test_clear_field_leaves_others() {
            let mut errors = FieldErrors::new();
            errors.insert(ContactField::Name, "Name is required");
            errors.insert(ContactField::Subject, "Subject is required");
            errors.clear_field(ContactField::Name);
            assert!(!errors.contains(ContactField::Name));
            assert!(errors.contains(ContactField::Subject));
        }

        #[test]
        fn test_fields_are_in_form_order() {
            let mut errors = FieldErrors::new();
            errors.insert(ContactField::Message, "m");
            errors.insert(ContactField::Name, "n");
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, vec![ContactField::Name, ContactField::Message]);
        }

        #[test]
        fn test_display_lists_each_field() {
            let mut errors = FieldErrors::new();
            errors.insert(ContactField::Name, "Name is required");
            errors.insert(ContactField::Email, "Invalid email address");
            assert_eq!(
                errors.to_string(),
                "name: Name is required, email: Invalid email address"
            );
        }
    }

    #[test]
    fn test_values_get_by_field() {
        let values = ContactFormValues {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(values.get(ContactField::Name), "Jane");
        assert_eq!(values.get(ContactField::Email), "jane@example.com");
        assert_eq!(values.get(ContactField::Subject), "Hi");
        assert_eq!(values.get(ContactField::Message), "Hello");
    }
}
