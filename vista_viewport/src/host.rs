// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Read access to the host's scroll position and element geometry.
///
/// `K` is whatever handle the host uses to name elements: section ids for the
/// tracker, element handles for reveal targets. A single host type usually
/// implements this for several key types.
pub trait LayoutHost<K: ?Sized> {
    /// Current vertical scroll offset of the document, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Current viewport height, in pixels.
    fn viewport_height(&self) -> f64;

    /// Viewport-relative bounding box of `element`.
    ///
    /// Returns `None` when the element is not attached (not rendered yet, or
    /// already torn down). Callers treat that as "not a candidate" rather than
    /// as an error.
    fn bounding_rect(&self, element: &K) -> Option<Rect>;
}

impl<K: ?Sized, H: LayoutHost<K> + ?Sized> LayoutHost<K> for &H {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn bounding_rect(&self, element: &K) -> Option<Rect> {
        (**self).bounding_rect(element)
    }
}
