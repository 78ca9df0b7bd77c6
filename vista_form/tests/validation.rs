// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation properties of `ContactForm`.

use proptest::prelude::*;
use vista_form::{ContactForm, Field, FieldError, is_valid_email};

proptest! {
    #[test]
    fn well_formed_addresses_pass(address in "[a-z0-9._%+-]{1,16}@[a-z0-9-]{1,12}(\\.[a-z]{2,6}){1,3}") {
        prop_assert!(is_valid_email(&address));
    }

    #[test]
    fn whitespace_never_passes(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}\\.[a-z]{2,4}",
        space in prop::sample::select(vec![" ", "\t", "\n", "\u{a0}"]),
        at_end in any::<bool>(),
    ) {
        let address = if at_end {
            format!("{local}@{domain}{space}")
        } else {
            format!("{local}{space}@{domain}")
        };
        prop_assert!(!is_valid_email(&address));
    }

    /// A submission succeeds exactly when no field is blank and the email is
    /// well formed; success always leaves an empty form behind.
    #[test]
    fn submit_outcome_matches_field_checks(
        name in "[ a-zA-Z]{0,6}",
        email in "[ a-z@.]{0,10}",
        message in "[ a-z]{0,6}",
    ) {
        let mut form = ContactForm::new();
        form.edit(Field::Name, name.as_str());
        form.edit(Field::Email, email.as_str());
        form.edit(Field::Message, message.as_str());

        let blank = |s: &str| s.trim().is_empty();
        let should_pass = !blank(&name) && !blank(&email) && !blank(&message) && is_valid_email(&email);

        match form.submit() {
            Ok(submission) => {
                prop_assert!(should_pass);
                prop_assert_eq!(submission.email, email);
                prop_assert_eq!(form, ContactForm::new());
            }
            Err(errors) => {
                prop_assert!(!should_pass);
                prop_assert_eq!(errors.contains(Field::Name), blank(&name));
                prop_assert_eq!(errors.contains(Field::Message), blank(&message));
                for error in &errors.0 {
                    prop_assert_eq!(form.error(error.field()), Some(*error));
                }
                if !blank(&email) && !is_valid_email(&email) {
                    prop_assert!(errors.0.contains(&FieldError::InvalidEmail));
                }
            }
        }
    }
}
