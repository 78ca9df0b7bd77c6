// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Reveal: scroll-triggered entrance animations.
//!
//! Elements register a [`RevealSpec`]: an [`AnimationSpec`] describing the
//! offset state they are revealed *from* (translation and opacity), and a
//! [`Trigger`] saying when to play. Scroll triggers watch an element's top
//! edge against two viewport lines (`top 85%` and `top 50%` by default) and
//! map each crossing to a [`ToggleAction`]; the default plays when the start
//! line is crossed going down and reverses when it is crossed going back up.
//!
//! The [`RevealAnimator`] owns all reveals. It is headless: hosts call
//! [`RevealAnimator::observe`] after scrolling, [`RevealAnimator::tick`] once
//! per frame, and receive property writes through a [`PropertySink`].
//!
//! - Playing a reveal that is already playing or settled forward does
//!   nothing, so repeated scroll events are harmless.
//! - A new command on an in-flight tween redirects it from its current
//!   position; there is never more than one tween per element and property.
//! - Releasing a reveal (alone, by scope, or all at once) cancels its tween,
//!   and the element is never written again.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use vista_reveal::{PlayState, PropertyMask, RevealAnimator, RevealSpec, VisualProps};
//! use vista_viewport::{LayoutHost, Rect};
//!
//! struct Page {
//!     card_top: f64,
//! }
//!
//! impl LayoutHost<u32> for Page {
//!     fn scroll_offset(&self) -> f64 {
//!         0.0
//!     }
//!     fn viewport_height(&self) -> f64 {
//!         1000.0
//!     }
//!     fn bounding_rect(&self, _: &u32) -> Option<Rect> {
//!         Some(Rect::new(0.0, self.card_top, 300.0, self.card_top + 400.0))
//!     }
//! }
//!
//! let mut page = Page { card_top: 1200.0 };
//! let mut animator = RevealAnimator::new();
//! animator.register(&page, 7, RevealSpec::card(0));
//! animator.observe(&page);
//!
//! // Scroll until the card's top passes 85% of the viewport.
//! page.card_top = 700.0;
//! animator.observe(&page);
//! assert_eq!(animator.play_state(&7), Some(PlayState::PlayingForward));
//!
//! let mut frames = 0;
//! animator.tick(Duration::from_millis(800), &mut |_: &u32, _: VisualProps, _: PropertyMask| {
//!     frames += 1;
//! });
//! assert_eq!(animator.props(&7), Some(VisualProps::REST));
//! assert_eq!(frames, 1);
//! ```
//!
//! Mount-time sequences such as a hero entrance are built with a
//! [`Timeline`](timeline::Timeline) and registered like any other reveal.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
pub mod easing;
mod props;
mod spec;
pub mod timeline;
mod trigger;
mod tween;

pub use animator::{
    PlayState, PropertySink, RevealAnimator, RevealEvent, ScopeBuilder, ScopeError, ScopeId,
};
pub use easing::{Easing, EasingFn};
pub use props::{PropertyMask, VisualProps};
pub use spec::{AnimationSpec, RevealSpec};
pub use trigger::{Crossing, ScrollTrigger, ToggleAction, ToggleActions, Trigger};
pub use tween::{Direction, Tween};
