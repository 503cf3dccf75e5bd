//! Contact form state and the submission state machine

use super::field::FormField;
use crate::contact::{ContactField, ContactFormValues, FieldErrors, SubmissionOutcome};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A delivery is outstanding; further submissions are refused
    Submitting,
    /// The last delivery failed. Values are kept for another try.
    Failed,
}

/// The contact form: four fields plus a submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::text(ContactField::Name),
            email: FormField::text(ContactField::Email),
            subject: FormField::text(ContactField::Subject),
            message: FormField::text(ContactField::Message),
            active_field_index: 0,
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Direct access to a field. Does not touch errors; use
    /// [`ContactForm::edit`] for user edits.
    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Apply a user edit to a field and clear that field's error
    pub fn edit(&mut self, field: ContactField, change: impl FnOnce(&mut FormField)) {
        change(self.field_mut(field));
        self.errors.clear_field(field);
    }

    /// The field under the cursor, or `None` on the submit row
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.active_field_index).copied()
    }

    /// Apply a user edit to the active field
    pub fn edit_active(&mut self, change: impl FnOnce(&mut FormField)) {
        if let Some(field) = self.active_contact_field() {
            self.edit(field, change);
        }
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn values(&self) -> ContactFormValues {
        ContactFormValues {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            subject: self.subject.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn has_failed(&self) -> bool {
        self.status == SubmitStatus::Failed
    }

    /// Enter the submitting state and snapshot the values.
    ///
    /// Returns `None` while an earlier submission is still outstanding.
    pub fn begin_submit(&mut self) -> Option<ContactFormValues> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.values())
    }

    /// Apply the outcome of the attempt started by [`ContactForm::begin_submit`]
    pub fn finish(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => {
                for field in ContactField::ALL {
                    self.field_mut(field).clear();
                }
                self.errors.clear();
                self.active_field_index = 0;
                self.status = SubmitStatus::Idle;
            }
            SubmissionOutcome::ValidationFailed(errors) => {
                self.errors = errors.clone();
                if let Some(first) = errors.fields().next() {
                    self.active_field_index = first_index(first);
                }
                self.status = SubmitStatus::Idle;
            }
            SubmissionOutcome::DeliveryFailed { .. } => {
                self.errors.clear();
                self.status = SubmitStatus::Failed;
            }
        }
    }
}

fn first_index(field: ContactField) -> usize {
    ContactField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        ContactField::ALL.get(index).map(|f| self.field(*f))
    }
}
