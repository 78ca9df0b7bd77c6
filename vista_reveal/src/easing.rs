// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! Every curve maps linear progress `t` in `[0, 1]` to eased progress in
//! `[0, 1]`, with `f(0) == 0` and `f(1) == 1` exactly. Inputs outside the unit
//! interval are clamped.

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f64) -> f64;

/// Identity easing (constant velocity).
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
#[must_use]
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Cubic ease-in.
#[inline]
#[must_use]
pub fn ease_in_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Quartic ease-out (a strong deceleration, `power3.out` in scroll-animation
/// vocabulary).
#[inline]
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    let u2 = u * u;
    1.0 - u2 * u2
}

/// Named easing curve.
///
/// Entrance reveals default to [`Easing::EaseOut`]; the hero timeline uses
/// [`Easing::EaseOutQuart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// [`linear`].
    Linear,
    /// [`ease_in`].
    EaseIn,
    /// [`ease_out`].
    #[default]
    EaseOut,
    /// [`ease_in_out`].
    EaseInOut,
    /// [`ease_in_cubic`].
    EaseInCubic,
    /// [`ease_out_cubic`].
    EaseOutCubic,
    /// [`ease_out_quart`].
    EaseOutQuart,
}

impl Easing {
    /// The function implementing this curve.
    #[must_use]
    pub fn as_fn(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
            Self::EaseInCubic => ease_in_cubic,
            Self::EaseOutCubic => ease_out_cubic,
            Self::EaseOutQuart => ease_out_quart,
        }
    }

    /// Applies the curve to `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        (self.as_fn())(t)
    }

    /// Returns `true` for curves that finish slower than they start.
    #[must_use]
    pub fn decelerates(self) -> bool {
        matches!(self, Self::EaseOut | Self::EaseOutCubic | Self::EaseOutQuart)
    }
}
