// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers over viewport-relative rectangles.
//!
//! All rectangles handled here are in *viewport* coordinates: `y0` is the
//! distance from the top of the viewport to the element's top edge (negative
//! once the element has scrolled above the viewport), and `y1` is the same
//! for the bottom edge. This matches what a browser reports for
//! `getBoundingClientRect`.

use kurbo::Rect;

/// Returns `true` if `rect` straddles the horizontal line at `line_y`.
///
/// Both edges are inclusive: a rectangle whose top or bottom sits exactly on
/// the line counts as straddling it.
///
/// ```rust
/// use kurbo::Rect;
/// use vista_viewport::geometry::straddles_line;
///
/// let about = Rect::new(0.0, 50.0, 1280.0, 850.0);
/// assert!(straddles_line(about, 100.0));
/// assert!(!straddles_line(about, 900.0));
/// ```
#[must_use]
#[inline]
pub fn straddles_line(rect: Rect, line_y: f64) -> bool {
    rect.y0 <= line_y && rect.y1 >= line_y
}

/// Returns the Y coordinate of a horizontal line placed at `fraction` of the
/// viewport height, measured from the viewport top.
///
/// A `fraction` of `0.85` is the `top 85%` position used by scroll triggers.
/// The fraction is not clamped; values outside `0..=1` describe lines above
/// or below the visible area.
#[must_use]
#[inline]
pub fn viewport_line(viewport_height: f64, fraction: f64) -> f64 {
    viewport_height * fraction
}

/// Converts a viewport-relative top edge into a document offset.
#[must_use]
#[inline]
pub fn document_top(rect: Rect, scroll_offset: f64) -> f64 {
    rect.y0 + scroll_offset
}

/// Where an element's top edge sits relative to a trigger's start and end lines.
///
/// Scrolling down moves content up, so an element travels
/// `Before → Active → After` as the page scrolls down and the reverse as it
/// scrolls back up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerZone {
    /// The top edge is below the start line; the trigger has not begun.
    Before,
    /// The top edge has crossed the start line but not the end line.
    Active,
    /// The top edge has crossed the end line as well.
    After,
}

impl TriggerZone {
    /// Classifies `top` against a start line and an end line.
    ///
    /// Lines are viewport Y coordinates. A top edge exactly on a line counts
    /// as having crossed it. If `end_line` is below `start_line` the two are
    /// swapped so the classification stays monotonic.
    #[must_use]
    pub fn classify(top: f64, start_line: f64, end_line: f64) -> Self {
        let (start, end) = if end_line <= start_line {
            (start_line, end_line)
        } else {
            (end_line, start_line)
        };
        if top > start {
            Self::Before
        } else if top > end {
            Self::Active
        } else {
            Self::After
        }
    }

    /// Returns `true` once the start line has been crossed.
    #[must_use]
    pub fn has_started(self) -> bool {
        !matches!(self, Self::Before)
    }
}
