// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Form: headless contact form state.
//!
//! [`ContactForm`] keeps the values of the name, email, and message fields
//! along with one inline [`FieldError`] per field. Submission is local: a
//! valid form hands back a [`Submission`] and resets, and where it goes next
//! is up to the caller.
//!
//! ```rust
//! use vista_form::{ContactForm, Field, FieldError};
//!
//! let mut form = ContactForm::new();
//! form.edit(Field::Name, "Ada");
//! form.edit(Field::Email, "ada@engine");
//! form.edit(Field::Message, "Hello!");
//!
//! let errors = form.submit().unwrap_err();
//! assert_eq!(errors.0, [FieldError::InvalidEmail]);
//!
//! form.edit(Field::Email, "ada@analytical.engine");
//! assert!(form.error(Field::Email).is_none());
//! assert_eq!(form.submit().unwrap().name, "Ada");
//! assert_eq!(form.value(Field::Name), "");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod email;
mod form;

pub use email::is_valid_email;
pub use form::{ContactForm, Field, FieldError, Submission, ValidationErrors};
