// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::geometry::straddles_line;
use crate::host::LayoutHost;
use crate::section::{Section, SectionError};
use crate::state::{ScrollChanges, ScrollState};

/// Tunables for [`ViewportTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Scroll offset (pixels) past which `is_past_threshold` becomes `true`.
    ///
    /// The comparison is strict: an offset equal to the threshold is not past it.
    pub past_threshold: f64,
    /// Distance (pixels) from the viewport top of the horizontal reference
    /// line used for active-section detection.
    pub reference_line: f64,
}

impl TrackerConfig {
    /// Default chrome threshold, in pixels.
    pub const DEFAULT_PAST_THRESHOLD: f64 = 50.0;
    /// Default reference line, in pixels from the viewport top.
    pub const DEFAULT_REFERENCE_LINE: f64 = 100.0;
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            past_threshold: Self::DEFAULT_PAST_THRESHOLD,
            reference_line: Self::DEFAULT_REFERENCE_LINE,
        }
    }
}

/// Receives scroll state after each recompute.
///
/// Implemented for any `FnMut(&ScrollState<K>, ScrollChanges)` closure.
pub trait ScrollSubscriber<K> {
    /// Called with the freshly recomputed state and the set of fields that
    /// changed. Always called, even when `changes` is empty.
    fn on_scroll(&mut self, state: &ScrollState<K>, changes: ScrollChanges);
}

impl<K, F> ScrollSubscriber<K> for F
where
    F: FnMut(&ScrollState<K>, ScrollChanges),
{
    fn on_scroll(&mut self, state: &ScrollState<K>, changes: ScrollChanges) {
        self(state, changes);
    }
}

/// Derives [`ScrollState`] from host geometry and a list of sections.
///
/// ## Active-section policy
///
/// On each recompute the sections are visited in registration order and the
/// **first** one whose bounding box straddles the reference line becomes
/// active. When no section straddles the line (for example while a fast
/// scroll lands in a gap, or before anything is rendered) the previous active
/// section is **retained**. Retention keeps navigation highlights from
/// flickering and is intentional. Sections whose element is not attached are
/// skipped.
///
/// Each recompute is `O(sections)`.
#[derive(Clone, Debug)]
pub struct ViewportTracker<K> {
    sections: Vec<Section<K>>,
    config: TrackerConfig,
    state: ScrollState<K>,
}

impl<K: Clone + PartialEq + Debug> ViewportTracker<K> {
    /// Creates a tracker with the default [`TrackerConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Creates a tracker with the given configuration.
    #[must_use]
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            sections: Vec::new(),
            config,
            state: ScrollState::default(),
        }
    }

    /// Seeds the active section reported before the first recompute.
    ///
    /// The id does not have to be registered yet, but it must be by the time
    /// anyone relies on [`ScrollState::active_section`] naming a section.
    #[must_use]
    pub fn with_initial_active(mut self, id: K) -> Self {
        self.state.active_section = Some(id);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the most recently computed state.
    #[must_use]
    pub fn state(&self) -> &ScrollState<K> {
        &self.state
    }

    /// Returns the registered sections in registration order.
    #[must_use]
    pub fn sections(&self) -> &[Section<K>] {
        &self.sections
    }

    /// Returns `true` if a section with `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.sections.iter().any(|s| s.id() == id)
    }

    /// Appends a section to the registration order.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::Duplicate`] if `id` is already registered; the
    /// existing registration is left untouched.
    pub fn register_section(&mut self, id: K) -> Result<&Section<K>, SectionError<K>> {
        if self.contains(&id) {
            return Err(SectionError::Duplicate(id));
        }
        let index = self.sections.len();
        tracing::trace!(section = ?id, index, "registered section");
        self.sections.push(Section::new(id, index));
        Ok(&self.sections[index])
    }

    /// Removes a section. Returns `true` if it was registered.
    ///
    /// Remaining sections keep their relative order and are re-indexed. If the
    /// removed section was active, the active section is cleared so the state
    /// never names an unregistered section.
    pub fn unregister_section(&mut self, id: &K) -> bool {
        let Some(pos) = self.sections.iter().position(|s| s.id() == id) else {
            return false;
        };
        self.sections.remove(pos);
        for (index, section) in self.sections.iter_mut().enumerate().skip(pos) {
            *section = Section::new(section.id().clone(), index);
        }
        if self.state.active_section.as_ref() == Some(id) {
            self.state.active_section = None;
        }
        tracing::trace!(section = ?id, "unregistered section");
        true
    }

    /// Recomputes the scroll state from the host's current geometry.
    ///
    /// Returns which parts of [`Self::state`] changed.
    pub fn on_scroll_or_resize<H>(&mut self, host: &H) -> ScrollChanges
    where
        H: LayoutHost<K> + ?Sized,
    {
        let offset_y = host.scroll_offset();
        let is_past_threshold = offset_y > self.config.past_threshold;
        let candidate = self.first_candidate(host).cloned();

        let mut changes = ScrollChanges::empty();
        if offset_y != self.state.offset_y {
            changes |= ScrollChanges::OFFSET;
        }
        if is_past_threshold != self.state.is_past_threshold {
            changes |= ScrollChanges::PAST_THRESHOLD;
        }

        self.state.offset_y = offset_y;
        self.state.is_past_threshold = is_past_threshold;

        // No candidate: keep whatever was active before.
        if let Some(id) = candidate {
            if self.state.active_section.as_ref() != Some(&id) {
                tracing::debug!(from = ?self.state.active_section, to = ?id, "active section changed");
                self.state.active_section = Some(id);
                changes |= ScrollChanges::ACTIVE_SECTION;
            }
        }

        tracing::trace!(offset_y, ?changes, "recomputed scroll state");
        changes
    }

    /// Recomputes the state, then hands it to each subscriber in order.
    ///
    /// The recompute always completes before the first subscriber runs, so
    /// every subscriber observes the same, final state for this event.
    pub fn dispatch<H>(
        &mut self,
        host: &H,
        subscribers: &mut [&mut dyn ScrollSubscriber<K>],
    ) -> ScrollChanges
    where
        H: LayoutHost<K> + ?Sized,
    {
        let changes = self.on_scroll_or_resize(host);
        for subscriber in subscribers.iter_mut() {
            subscriber.on_scroll(&self.state, changes);
        }
        changes
    }

    /// The first attached section, in registration order, that straddles the
    /// reference line.
    fn first_candidate<H>(&self, host: &H) -> Option<&K>
    where
        H: LayoutHost<K> + ?Sized,
    {
        let line = self.config.reference_line;
        self.sections
            .iter()
            .map(Section::id)
            .find(|id| host.bounding_rect(id).is_some_and(|r| straddles_line(r, line)))
    }
}

impl<K: Clone + PartialEq + Debug> Default for ViewportTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
