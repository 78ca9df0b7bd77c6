// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequenced mount-time reveals.
//!
//! A [`Timeline`] lays out several reveals on one clock, each placed after,
//! overlapping, or at a fixed offset from what came before. It compiles down
//! to plain [`RevealSpec::on_mount`] reveals with absolute delays, so the
//! animator needs no timeline awareness.

use alloc::vec::Vec;
use core::time::Duration;

use crate::easing::Easing;
use crate::spec::{AnimationSpec, RevealSpec};

/// Where a clip starts relative to the timeline so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// When the timeline built so far ends.
    #[default]
    AfterPrevious,
    /// This much before the timeline built so far ends.
    Overlap(Duration),
    /// At an absolute offset from the start of the timeline.
    At(Duration),
}

#[derive(Clone, Debug, PartialEq)]
struct Clip<H> {
    element: H,
    animation: AnimationSpec,
    start: Duration,
}

/// A sequence of reveals sharing one clock and one easing curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<H> {
    clips: Vec<Clip<H>>,
    easing: Easing,
    end: Duration,
}

impl<H> Timeline<H> {
    /// Creates an empty timeline whose clips ease with `easing`.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self {
            clips: Vec::new(),
            easing,
            end: Duration::ZERO,
        }
    }

    /// Adds a clip revealing `element` with `animation`, placed at `position`.
    ///
    /// The animation's own delay is added on top of the position.
    #[must_use]
    pub fn from(mut self, element: H, animation: AnimationSpec, position: Position) -> Self {
        let anchor = match position {
            Position::AfterPrevious => self.end,
            Position::Overlap(by) => self.end.saturating_sub(by),
            Position::At(at) => at,
        };
        let start = anchor + animation.total_delay();
        self.end = self.end.max(start + animation.duration);
        self.clips.push(Clip {
            element,
            animation,
            start,
        });
        self
    }

    /// Time from mount until the last clip settles.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end
    }

    /// Number of clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Whether the timeline has no clips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Start offsets of the clips in insertion order.
    pub fn starts(&self) -> impl Iterator<Item = (&H, Duration)> + '_ {
        self.clips.iter().map(|c| (&c.element, c.start))
    }

    /// Compiles the timeline into one mount reveal per clip.
    #[must_use]
    pub fn into_reveals(self) -> Vec<(H, RevealSpec<H>)> {
        let easing = self.easing;
        self.clips
            .into_iter()
            .map(|clip| {
                let animation = AnimationSpec {
                    delay: clip.start,
                    delay_index: 0,
                    easing,
                    ..clip.animation
                };
                (clip.element, RevealSpec::on_mount(animation))
            })
            .collect()
    }

    /// The landing-page hero entrance: title rises 100px over 1.2s after
    /// 0.3s, subtitle rises 50px over 1s overlapping by 0.6s, and the call to
    /// action rises 30px over 0.8s overlapping by 0.4s, all on a strong
    /// ease-out.
    #[must_use]
    pub fn hero(title: H, subtitle: H, cta: H) -> Self {
        Self::new(Easing::EaseOutQuart)
            .from(
                title,
                AnimationSpec::rise(100.0, Duration::from_millis(1200))
                    .delay(Duration::from_millis(300)),
                Position::AfterPrevious,
            )
            .from(
                subtitle,
                AnimationSpec::rise(50.0, Duration::from_secs(1)),
                Position::Overlap(Duration::from_millis(600)),
            )
            .from(
                cta,
                AnimationSpec::rise(30.0, Duration::from_millis(800)),
                Position::Overlap(Duration::from_millis(400)),
            )
    }
}
