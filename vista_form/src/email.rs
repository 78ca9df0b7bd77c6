// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether `address` has the `local@domain.tld` shape.
///
/// Accepts exactly one `@` with a non-empty local part, no whitespace
/// anywhere, and a domain containing a `.` that is neither its first nor its
/// last character. Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`. No attempt is
/// made to follow RFC 5322.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
