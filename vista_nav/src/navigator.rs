// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use vista_viewport::geometry::document_top;
use vista_viewport::{LayoutHost, ScrollChanges, ScrollState, ScrollSubscriber};

use crate::overlay::{OverlayEvent, OverlayState};

/// A navigation control pointing at a section.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavItem<K> {
    /// Section the item scrolls to and is highlighted for.
    pub section: K,
    /// Display label.
    pub label: String,
}

impl<K> NavItem<K> {
    /// Creates an item.
    #[must_use]
    pub fn new(section: K, label: impl Into<String>) -> Self {
        Self {
            section,
            label: label.into(),
        }
    }
}

/// Tunables for [`SectionNavigator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Height of the fixed header, in pixels. Scroll targets land this far
    /// above a section's top so the header does not cover it.
    pub header_offset: f64,
}

impl NavConfig {
    /// Default header offset, in pixels.
    pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: Self::DEFAULT_HEADER_OFFSET,
        }
    }
}

/// A host that can smoothly scroll the document.
pub trait ScrollHost<K: ?Sized>: LayoutHost<K> {
    /// Starts a smooth scroll to document offset `y`.
    ///
    /// Hosts clamp `y` to their scrollable range.
    fn smooth_scroll_to(&mut self, y: f64);
}

/// Highlights navigation items for the active section and scrolls to
/// sections on request.
///
/// The navigator learns the active section by subscribing to a
/// `ViewportTracker` (it implements [`ScrollSubscriber`]); it never feeds
/// anything back. It also owns the mobile overlay state: the overlay closes
/// when an item is selected, when the page scrolls, and when the user
/// dismisses it.
#[derive(Clone, Debug)]
pub struct SectionNavigator<K> {
    items: Vec<NavItem<K>>,
    config: NavConfig,
    active: Option<K>,
    overlay: OverlayState,
}

impl<K: Clone + PartialEq + Debug> SectionNavigator<K> {
    /// Creates a navigator over `items` with the default [`NavConfig`].
    #[must_use]
    pub fn new(items: Vec<NavItem<K>>) -> Self {
        Self::with_config(items, NavConfig::default())
    }

    /// Creates a navigator with the given configuration.
    #[must_use]
    pub fn with_config(items: Vec<NavItem<K>>, config: NavConfig) -> Self {
        Self {
            items,
            config,
            active: None,
            overlay: OverlayState::Closed,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The navigation items in display order.
    #[must_use]
    pub fn items(&self) -> &[NavItem<K>] {
        &self.items
    }

    /// The active section last reported by the tracker.
    #[must_use]
    pub fn active_section(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Whether `section` is the active section.
    #[must_use]
    pub fn is_active(&self, section: &K) -> bool {
        self.active.as_ref() == Some(section)
    }

    /// Items paired with whether each should be highlighted.
    pub fn highlighted(&self) -> impl Iterator<Item = (&NavItem<K>, bool)> + '_ {
        self.items
            .iter()
            .map(|item| (item, self.is_active(&item.section)))
    }

    /// Current mobile overlay state.
    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Opens the mobile overlay.
    pub fn open_overlay(&mut self) {
        self.transition(OverlayEvent::Open);
    }

    /// Dismisses the mobile overlay.
    pub fn dismiss_overlay(&mut self) {
        self.transition(OverlayEvent::Dismiss);
    }

    /// Document offset a scroll to `section` would land on:
    /// `top + scroll_offset - header_offset`.
    ///
    /// Returns `None` if the section's element is not attached. The result is
    /// not clamped; a section at the very top yields a negative target.
    #[must_use]
    pub fn target_for<H>(&self, section: &K, host: &H) -> Option<f64>
    where
        H: LayoutHost<K> + ?Sized,
    {
        let rect = host.bounding_rect(section)?;
        Some(document_top(rect, host.scroll_offset()) - self.config.header_offset)
    }

    /// Smoothly scrolls to `section`, leaving room for the fixed header.
    ///
    /// An unknown or detached section is silently ignored. Either way the
    /// mobile overlay ends up closed. Returns the requested target, if any.
    pub fn scroll_to_section<H>(&mut self, section: &K, host: &mut H) -> Option<f64>
    where
        H: ScrollHost<K> + ?Sized,
    {
        let target = self.target_for(section, host);
        match target {
            Some(y) => {
                tracing::debug!(section = ?section, target = y, "scrolling to section");
                host.smooth_scroll_to(y);
            }
            None => tracing::trace!(section = ?section, "ignored scroll to unknown section"),
        }
        self.transition(OverlayEvent::Select);
        target
    }

    fn transition(&mut self, event: OverlayEvent) {
        let next = self.overlay.on(event);
        if next != self.overlay {
            tracing::trace!(from = ?self.overlay, to = ?next, ?event, "nav overlay");
            self.overlay = next;
        }
    }
}

impl<K: Clone + PartialEq + Debug> ScrollSubscriber<K> for SectionNavigator<K> {
    fn on_scroll(&mut self, state: &ScrollState<K>, changes: ScrollChanges) {
        if self.active != state.active_section {
            self.active.clone_from(&state.active_section);
        }
        if changes.contains(ScrollChanges::OFFSET) {
            self.transition(OverlayEvent::Scroll);
        }
    }
}
