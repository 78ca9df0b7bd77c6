// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Page: a single-page portfolio assembled from the Vista crates.
//!
//! A [`PageConfig`] lists the page's sections (each with a [`SectionKind`]
//! layout), navbar items, projects, and tunables. [`PortfolioPage::mount`]
//! turns it into a running page:
//!
//! - a `ViewportTracker` over every section, seeded with the first one as
//!   active;
//! - a `SectionNavigator` subscribed to it;
//! - reveals for each layout, all in one animator scope: the hero entrance
//!   timeline plays on mount, about columns slide in from both sides,
//!   project cards rise in a stagger, and the contact form rises into place;
//! - a project [`Showcase`] dialog and a `ContactForm`.
//!
//! Hosts name elements with [`Element`] and implement `LayoutHost<Element>`
//! (and `ScrollHost<Element>` for navigation).
//!
//! ## Minimal example
//!
//! ```rust
//! use vista_page::{Element, PageConfig, PortfolioPage};
//! use vista_viewport::{LayoutHost, Rect};
//!
//! /// Four 800px sections; every other element sits at the top of its section.
//! struct Window {
//!     scroll: f64,
//! }
//!
//! impl LayoutHost<Element> for Window {
//!     fn scroll_offset(&self) -> f64 {
//!         self.scroll
//!     }
//!     fn viewport_height(&self) -> f64 {
//!         900.0
//!     }
//!     fn bounding_rect(&self, element: &Element) -> Option<Rect> {
//!         let index = match element {
//!             Element::Section(id) => ["hero", "about", "projects", "contact"]
//!                 .iter()
//!                 .position(|s| *s == id.as_str())?,
//!             Element::HeroTitle | Element::HeroSubtitle | Element::HeroCta => 0,
//!             Element::AboutImage | Element::AboutContent => 1,
//!             Element::ProjectCard(_) => 2,
//!             Element::ContactForm => 3,
//!         };
//!         let top = 800.0 * index as f64 - self.scroll;
//!         Some(Rect::new(0.0, top, 1280.0, top + 800.0))
//!     }
//! }
//!
//! let mut window = Window { scroll: 0.0 };
//! let mut page = PortfolioPage::mount(PageConfig::portfolio(), &window).unwrap();
//!
//! window.scroll = 750.0;
//! page.on_scroll(&window);
//! assert_eq!(
//!     page.scroll_state().active_section,
//!     Some(Element::section("about"))
//! );
//! assert!(page.navigator().is_active(&Element::section("about")));
//!
//! // Hero timeline (3) + about (2) + project cards (2) + contact form (1).
//! assert_eq!(page.unmount(), 8);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod element;
mod page;
mod showcase;

pub use config::{PageConfig, SectionConfig, SectionKind, SocialLink};
pub use element::Element;
pub use page::{PageError, PortfolioPage, ScrollUpdate};
pub use showcase::{Project, Showcase};
