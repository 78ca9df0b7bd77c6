// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// The set of visual properties a tween drives.
    ///
    /// Two reveals on the same element conflict when their masks intersect.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PropertyMask: u8 {
        /// Horizontal translation.
        const TRANSLATE_X = 1 << 0;
        /// Vertical translation.
        const TRANSLATE_Y = 1 << 1;
        /// Opacity.
        const OPACITY = 1 << 2;
    }
}

/// Animatable visual state of an element.
///
/// Translations are in pixels relative to the element's laid-out position;
/// opacity is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualProps {
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Vertical offset in pixels; positive values push the element down.
    pub translate_y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl VisualProps {
    /// The resting state: no offset, fully opaque.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
    };

    /// An element pushed down by `dy` pixels and fully transparent.
    #[must_use]
    pub const fn below(dy: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: dy,
            opacity: 0.0,
        }
    }

    /// An element pushed sideways by `dx` pixels and fully transparent.
    #[must_use]
    pub const fn beside(dx: f64) -> Self {
        Self {
            translate_x: dx,
            translate_y: 0.0,
            opacity: 0.0,
        }
    }

    /// Linear interpolation toward `to`.
    ///
    /// `t` is not clamped. `t == 0.0` and `t == 1.0` return `self` and `to`
    /// exactly.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            opacity: mix(self.opacity, to.opacity),
        }
    }

    /// The properties on which `self` and `other` differ.
    #[must_use]
    pub fn diff(self, other: Self) -> PropertyMask {
        let mut mask = PropertyMask::empty();
        mask.set(PropertyMask::TRANSLATE_X, self.translate_x != other.translate_x);
        mask.set(PropertyMask::TRANSLATE_Y, self.translate_y != other.translate_y);
        mask.set(PropertyMask::OPACITY, self.opacity != other.opacity);
        mask
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::REST
    }
}
