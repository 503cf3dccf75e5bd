//! Form field value objects

use crate::contact::{text_len, ContactField};

/// A single text input of the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: ContactField,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn text(field: ContactField) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.field.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Start a new line. Ignored for single-line fields.
    pub fn push_newline(&mut self) {
        if self.is_multiline() {
            self.value.push('\n');
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Length typed so far, measured the same way as the field ceiling
    pub fn char_count(&self) -> usize {
        text_len(&self.value)
    }

    /// Get the display value for rendering, falling back to the placeholder
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.field.placeholder()
        } else {
            &self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(ContactField::Name);
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text(ContactField::Email);
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut subject = FormField::text(ContactField::Subject);
        subject.push_newline();
        assert!(subject.is_empty());

        let mut message = FormField::text(ContactField::Message);
        message.push_char('a');
        message.push_newline();
        message.push_char('b');
        assert_eq!(message.as_text(), "a\nb");
    }

    #[test]
    fn test_display_value_uses_placeholder_when_empty() {
        let mut field = FormField::text(ContactField::Email);
        assert_eq!(field.display_value(), "your@email.com");
        field.set_text("a@b.io".to_string());
        assert_eq!(field.display_value(), "a@b.io");
    }

    #[test]
    fn test_char_count_is_not_bytes() {
        let mut field = FormField::text(ContactField::Name);
        field.set_text("éé".to_string());
        assert_eq!(field.char_count(), 2);
    }

    #[test]
    fn test_char_count_matches_ceiling_measure() {
        let mut field = FormField::text(ContactField::Name);
        field.set_text("a\u{1F680}".to_string());
        assert_eq!(field.char_count(), 3);
    }
}
