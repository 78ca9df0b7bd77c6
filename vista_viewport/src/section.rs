// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

/// A named, vertically stacked page region.
///
/// Identity is the `id`. The registration order doubles as the tie-break
/// order for active-section detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<K> {
    id: K,
    order_index: usize,
}

impl<K> Section<K> {
    pub(crate) fn new(id: K, order_index: usize) -> Self {
        Self { id, order_index }
    }

    /// The section's identifier.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Position in registration order, starting at zero.
    #[must_use]
    pub fn order_index(&self) -> usize {
        self.order_index
    }
}

/// Errors from section registration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SectionError<K: Debug> {
    /// A section with this id is already registered.
    #[error("section {0:?} is already registered")]
    Duplicate(K),
}
