// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Visibility of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayState {
    /// Hidden.
    #[default]
    Closed,
    /// Shown over the page.
    Open,
}

/// Inputs to the overlay state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayEvent {
    /// The user pressed the menu button.
    Open,
    /// The user picked a navigation item.
    Select,
    /// The page scrolled.
    Scroll,
    /// The user dismissed the overlay (close button, backdrop, escape).
    Dismiss,
}

impl OverlayState {
    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The state after `event`.
    ///
    /// Only [`OverlayEvent::Open`] opens the overlay; every other event
    /// closes it, and closing an already closed overlay is a no-op.
    #[must_use]
    pub fn on(self, event: OverlayEvent) -> Self {
        match event {
            OverlayEvent::Open => Self::Open,
            OverlayEvent::Select | OverlayEvent::Scroll | OverlayEvent::Dismiss => Self::Closed,
        }
    }
}
