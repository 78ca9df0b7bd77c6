// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Nav: section navigation for single-page layouts.
//!
//! A [`SectionNavigator`] holds a static list of [`NavItem`]s. It subscribes
//! to a `ViewportTracker` to learn which section is active (for highlighting)
//! and turns "go to section" requests into smooth scrolls that stop a fixed
//! header height above the section, via a [`ScrollHost`].
//!
//! On small screens the navigation lives in an overlay; its two-state machine
//! is [`OverlayState`]. Selecting an item, scrolling, or dismissing closes it.
//!
//! ## Minimal example
//!
//! ```rust
//! use vista_nav::{NavItem, ScrollHost, SectionNavigator};
//! use vista_viewport::{LayoutHost, Rect};
//!
//! struct Window {
//!     scroll: f64,
//!     target: Option<f64>,
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
//!         (*id == "about").then(|| Rect::new(0.0, 800.0 - self.scroll, 1280.0, 1600.0 - self.scroll))
//!     }
//! }
//!
//! impl ScrollHost<&'static str> for Window {
//!     fn smooth_scroll_to(&mut self, y: f64) {
//!         self.target = Some(y);
//!     }
//! }
//!
//! let mut nav = SectionNavigator::new(vec![NavItem::new("about", "About")]);
//! let mut window = Window { scroll: 200.0, target: None };
//!
//! nav.scroll_to_section(&"about", &mut window);
//! assert_eq!(window.target, Some(720.0));
//!
//! // Unknown sections are ignored.
//! assert_eq!(nav.scroll_to_section(&"blog", &mut window), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod navigator;
mod overlay;

pub use navigator::{NavConfig, NavItem, ScrollHost, SectionNavigator};
pub use overlay::{OverlayEvent, OverlayState};
