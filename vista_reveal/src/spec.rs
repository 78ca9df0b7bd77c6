// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::easing::Easing;
use crate::props::{PropertyMask, VisualProps};
use crate::trigger::{ScrollTrigger, Trigger};

/// How an element animates from its offset state to rest.
///
/// The resting state is always [`VisualProps::REST`]; `from` is where the
/// element sits before the reveal plays (and after it fully reverses).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    /// Offset state the element is revealed from.
    pub from: VisualProps,
    /// Properties driven by the tween.
    pub properties: PropertyMask,
    /// Duration of one pass, forward or reverse.
    pub duration: Duration,
    /// Easing curve for both directions.
    pub easing: Easing,
    /// Delay before a forward pass from the offset state.
    pub delay: Duration,
    /// Position of this element in a staggered batch.
    pub delay_index: u32,
    /// Extra delay per `delay_index` step.
    pub stagger: Duration,
}

impl AnimationSpec {
    /// Reveal from `from` over `duration`, driving exactly the properties that
    /// differ from rest.
    #[must_use]
    pub fn from_offset(from: VisualProps, duration: Duration) -> Self {
        Self {
            from,
            properties: from.diff(VisualProps::REST),
            duration,
            easing: Easing::default(),
            delay: Duration::ZERO,
            delay_index: 0,
            stagger: Duration::ZERO,
        }
    }

    /// Card-style reveal: rises 80px while fading in over 0.8s, staggered
    /// 0.2s per card.
    #[must_use]
    pub fn card() -> Self {
        Self {
            stagger: Duration::from_millis(200),
            ..Self::from_offset(VisualProps::below(80.0), Duration::from_millis(800))
        }
    }

    /// Slides in from 100px to the left over 1s.
    #[must_use]
    pub fn slide_from_left() -> Self {
        Self::from_offset(VisualProps::beside(-100.0), Duration::from_secs(1))
    }

    /// Slides in from 100px to the right over 1s.
    #[must_use]
    pub fn slide_from_right() -> Self {
        Self::from_offset(VisualProps::beside(100.0), Duration::from_secs(1))
    }

    /// Rises `dy` pixels while fading in over `duration`.
    #[must_use]
    pub fn rise(dy: f64, duration: Duration) -> Self {
        Self::from_offset(VisualProps::below(dy), duration)
    }

    /// Sets the easing curve (builder).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the base delay (builder).
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the stagger position (builder).
    #[must_use]
    pub fn delay_index(mut self, index: u32) -> Self {
        self.delay_index = index;
        self
    }

    /// Base delay plus `delay_index * stagger`.
    #[must_use]
    pub fn total_delay(&self) -> Duration {
        self.delay
            .saturating_add(self.stagger.saturating_mul(self.delay_index))
    }

    /// Visual state at eased progress `t`, exact at both endpoints.
    #[must_use]
    pub fn props_at(&self, t: f64) -> VisualProps {
        self.from.lerp(VisualProps::REST, t)
    }
}

/// A reveal registration: the animation plus what starts it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealSpec<H> {
    /// How the element moves.
    pub animation: AnimationSpec,
    /// When it moves.
    pub trigger: Trigger<H>,
}

impl<H> RevealSpec<H> {
    /// Plays `animation` according to `trigger`.
    #[must_use]
    pub fn new(animation: AnimationSpec, trigger: ScrollTrigger<H>) -> Self {
        Self {
            animation,
            trigger: Trigger::Scroll(trigger),
        }
    }

    /// Plays `animation` once on registration.
    #[must_use]
    pub fn on_mount(animation: AnimationSpec) -> Self {
        Self {
            animation,
            trigger: Trigger::OnMount,
        }
    }

    /// The `index`-th card of a staggered grid, triggered by its own top edge
    /// at `top 85%` / `top 50%`.
    #[must_use]
    pub fn card(index: u32) -> Self {
        Self::new(AnimationSpec::card().delay_index(index), ScrollTrigger::on_self())
    }

    /// A side reveal driven by an enclosing `section` at `top 70%` / `top 30%`.
    ///
    /// `from_left` picks the direction the element slides in from.
    #[must_use]
    pub fn side(section: H, from_left: bool) -> Self {
        let animation = if from_left {
            AnimationSpec::slide_from_left()
        } else {
            AnimationSpec::slide_from_right()
        };
        Self::new(animation, ScrollTrigger::on_element(section).lines(0.7, 0.3))
    }

    /// A 60px rise over 1s driven by an enclosing `section` at `top 70%` /
    /// `top 30%` (the contact form).
    #[must_use]
    pub fn rise_with(section: H) -> Self {
        Self::new(
            AnimationSpec::rise(60.0, Duration::from_secs(1)),
            ScrollTrigger::on_element(section).lines(0.7, 0.3),
        )
    }
}
