// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::email::is_valid_email;

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Lowercase field name, as used in form markup.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field failed validation. Shown inline next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FieldError {
    /// The field is empty or whitespace only.
    #[error("{0} is required")]
    Required(Field),
    /// The email field does not look like `local@domain.tld`.
    #[error("email address is invalid")]
    InvalidEmail,
}

impl FieldError {
    /// The field this error belongs to.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::Required(field) => field,
            Self::InvalidEmail => Field::Email,
        }
    }
}

/// Every field error from one failed submission, in field order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Whether `field` has an error.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

/// The values of a successfully validated form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    /// Sender name, as typed.
    pub name: String,
    /// Reply address, as typed.
    pub email: String,
    /// Message body, as typed.
    pub message: String,
}

impl Submission {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Headless state of the contact form.
///
/// Editing a field clears that field's inline error. Submitting validates
/// every field at once; on success the values are handed back and the form
/// resets, on failure the errors are stored for display and the values are
/// kept so the user can fix them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: Submission,
    errors: [Option<FieldError>; 3],
}

impl ContactForm {
    /// An empty form with no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Inline error currently shown for `field`.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    /// Whether any inline error is shown.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Replaces the value of `field` and clears its error.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.errors[field.index()] = None;
    }

    /// Checks every field without changing the form.
    ///
    /// # Errors
    ///
    /// Returns the errors for every failing field, in field order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<_> = Field::ALL
            .into_iter()
            .filter_map(|field| self.check(field))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Validates the form and, if it passes, returns the submitted values and
    /// clears the form.
    ///
    /// Inline errors are replaced by the result of this validation: fields
    /// that now pass lose their error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if any field fails; the values are kept.
    pub fn submit(&mut self) -> Result<Submission, ValidationErrors> {
        for field in Field::ALL {
            self.errors[field.index()] = self.check(field);
        }
        if let Err(errors) = self.validate() {
            tracing::debug!(failed = errors.0.len(), "contact form rejected");
            return Err(errors);
        }
        let submission = core::mem::take(&mut self.values);
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "contact form submitted"
        );
        Ok(submission)
    }

    fn check(&self, field: Field) -> Option<FieldError> {
        let value = self.values.get(field);
        if value.trim().is_empty() {
            return Some(FieldError::Required(field));
        }
        if field == Field::Email && !is_valid_email(value) {
            return Some(FieldError::InvalidEmail);
        }
        None
    }
}
