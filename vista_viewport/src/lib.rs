// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Viewport: scroll-state tracking for single-page layouts.
//!
//! This crate is the source of truth for scroll-derived page state. Given the
//! host's scroll offset and the bounding boxes of a set of named sections, a
//! [`ViewportTracker`] computes a [`ScrollState`]:
//!
//! - whether the page has scrolled past a small threshold (used to switch the
//!   navbar between transparent and opaque [`Chrome`]), and
//! - which registered section is *active*, i.e. sits under a fixed reference
//!   line near the top of the viewport.
//!
//! It does **not** listen to any events itself or own any elements. Hosts
//! implement [`LayoutHost`] to expose scroll offset and element geometry, call
//! [`ViewportTracker::on_scroll_or_resize`] (or [`ViewportTracker::dispatch`])
//! from their scroll/resize handler, and forward the result to whoever needs
//! it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vista_viewport::{LayoutHost, ViewportTracker};
//!
//! struct Window {
//!     scroll: f64,
//! }
//!
//! impl LayoutHost<&'static str> for Window {
//!     fn scroll_offset(&self) -> f64 {
//!         self.scroll
//!     }
//!     fn viewport_height(&self) -> f64 {
//!         900.0
//!     }
//!     fn bounding_rect(&self, id: &&'static str) -> Option<Rect> {
//!         let (top, bottom) = match *id {
//!             "hero" => (0.0, 800.0),
//!             "about" => (800.0, 1600.0),
//!             "projects" => (1600.0, 2400.0),
//!             _ => return None,
//!         };
//!         Some(Rect::new(0.0, top - self.scroll, 1280.0, bottom - self.scroll))
//!     }
//! }
//!
//! let mut tracker = ViewportTracker::new();
//! for id in ["hero", "about", "projects"] {
//!     tracker.register_section(id).unwrap();
//! }
//!
//! tracker.on_scroll_or_resize(&Window { scroll: 750.0 });
//! assert_eq!(tracker.state().active_section, Some("about"));
//! assert!(tracker.state().is_past_threshold);
//! ```
//!
//! ## Tie-break and retention
//!
//! If several sections straddle the reference line at once (for example when
//! one section's bottom touches the next one's top exactly on the line), the
//! first in registration order wins. If none does, the previous active section
//! is kept. Both rules are deliberate; see [`ViewportTracker`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
mod host;
mod section;
mod state;
mod tracker;

pub use host::LayoutHost;
pub use section::{Section, SectionError};
pub use state::{Chrome, ScrollChanges, ScrollState};
pub use tracker::{ScrollSubscriber, TrackerConfig, ViewportTracker};

pub use kurbo::Rect;
