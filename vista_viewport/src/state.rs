// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

/// Scroll-derived page state, recomputed on every scroll or resize.
///
/// `active_section` is either `None` (nothing has ever satisfied the
/// active-section predicate) or the id of a registered section.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState<K> {
    /// Vertical scroll offset of the document, in pixels.
    pub offset_y: f64,
    /// Whether the page has scrolled past the chrome threshold.
    pub is_past_threshold: bool,
    /// The section currently under the reference line, if any.
    pub active_section: Option<K>,
}

impl<K> ScrollState<K> {
    /// State at the top of the page with the given initial active section.
    #[must_use]
    pub fn at_top(active_section: Option<K>) -> Self {
        Self {
            offset_y: 0.0,
            is_past_threshold: false,
            active_section,
        }
    }

    /// Navbar chrome that corresponds to this state.
    #[must_use]
    pub fn chrome(&self) -> Chrome {
        if self.is_past_threshold {
            Chrome::Opaque
        } else {
            Chrome::Transparent
        }
    }
}

impl<K> Default for ScrollState<K> {
    fn default() -> Self {
        Self::at_top(None)
    }
}

/// Visual treatment of fixed page chrome (the navbar background).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Chrome {
    /// Content shows through; used at the top of the page.
    #[default]
    Transparent,
    /// Solid, blurred background with a shadow.
    Opaque,
}

bitflags! {
    /// Which parts of a [`ScrollState`] changed during a recompute.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ScrollChanges: u8 {
        /// `offset_y` moved.
        const OFFSET = 1 << 0;
        /// `is_past_threshold` flipped.
        const PAST_THRESHOLD = 1 << 1;
        /// `active_section` now names a different section.
        const ACTIVE_SECTION = 1 << 2;
    }
}
