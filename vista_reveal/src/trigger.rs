// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll triggers and toggle actions.
//!
//! A [`ScrollTrigger`] watches the top edge of an element against two
//! horizontal lines placed at fractions of the viewport height: a *start*
//! line and an *end* line. As the edge moves between the
//! [`TriggerZone`]s those lines define, it produces [`Crossing`]s:
//!
//! | movement            | crossing              |
//! |---------------------|-----------------------|
//! | past start, down    | [`Crossing::Enter`]     |
//! | past end, down      | [`Crossing::Leave`]     |
//! | back past end, up   | [`Crossing::EnterBack`] |
//! | back past start, up | [`Crossing::LeaveBack`] |
//!
//! Each crossing maps to a [`ToggleAction`] through [`ToggleActions`]. The
//! default, `play none none reverse`, plays the entrance when the element
//! scrolls into view and reverses it when it scrolls back out below.

use smallvec::SmallVec;
use vista_viewport::geometry::TriggerZone;

/// What to do with a reveal when a crossing happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToggleAction {
    /// Leave the reveal alone.
    #[default]
    None,
    /// Play toward the resting state.
    Play,
    /// Play back toward the offset state.
    Reverse,
    /// Jump to the offset state and play forward again.
    Restart,
    /// Jump to the offset state and stop.
    Reset,
    /// Jump to the resting state and stop.
    Complete,
}

/// The four directed crossings of a scroll trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// The start line was crossed scrolling down.
    Enter,
    /// The end line was crossed scrolling down.
    Leave,
    /// The end line was crossed scrolling up.
    EnterBack,
    /// The start line was crossed scrolling up.
    LeaveBack,
}

impl Crossing {
    /// The crossings produced by moving from zone `from` to zone `to`, in the
    /// order they happened.
    ///
    /// Jumping over both lines in one step (a fast scroll) produces both
    /// crossings.
    #[must_use]
    pub fn between(from: TriggerZone, to: TriggerZone) -> SmallVec<[Self; 2]> {
        use TriggerZone::{Active, After, Before};
        let mut out = SmallVec::new();
        match (from, to) {
            (Before, Active) => out.push(Self::Enter),
            (Before, After) => out.extend([Self::Enter, Self::Leave]),
            (Active, After) => out.push(Self::Leave),
            (After, Active) => out.push(Self::EnterBack),
            (After, Before) => out.extend([Self::EnterBack, Self::LeaveBack]),
            (Active, Before) => out.push(Self::LeaveBack),
            (Before, Before) | (Active, Active) | (After, After) => {}
        }
        out
    }
}

/// Actions for each [`Crossing`], in `enter leave enter-back leave-back` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleActions {
    /// Action on [`Crossing::Enter`].
    pub on_enter: ToggleAction,
    /// Action on [`Crossing::Leave`].
    pub on_leave: ToggleAction,
    /// Action on [`Crossing::EnterBack`].
    pub on_enter_back: ToggleAction,
    /// Action on [`Crossing::LeaveBack`].
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `play none none reverse`: a restartable entrance.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// `play none none none`: a one-shot entrance.
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    /// The action for `crossing`.
    #[must_use]
    pub fn action_for(&self, crossing: Crossing) -> ToggleAction {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_REVERSE
    }
}

/// Watches an element's top edge against a start line and an end line.
///
/// `element` is the element whose geometry drives the trigger; `None` means
/// the animated element itself. Lines are fractions of the viewport height
/// measured from the top: `start: 0.85` is `top 85%`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTrigger<H> {
    /// Element whose top edge is watched; `None` for the animated element.
    pub element: Option<H>,
    /// Start line as a fraction of viewport height.
    pub start: f64,
    /// End line as a fraction of viewport height.
    pub end: f64,
    /// What each crossing does.
    pub actions: ToggleActions,
}

impl<H> ScrollTrigger<H> {
    /// Default start line, `top 85%`.
    pub const DEFAULT_START: f64 = 0.85;
    /// Default end line, `top 50%`.
    pub const DEFAULT_END: f64 = 0.5;

    /// A trigger on the animated element itself with the default lines.
    #[must_use]
    pub fn on_self() -> Self {
        Self {
            element: None,
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            actions: ToggleActions::default(),
        }
    }

    /// A trigger driven by another element (typically the enclosing section).
    #[must_use]
    pub fn on_element(element: H) -> Self {
        Self {
            element: Some(element),
            ..Self::on_self()
        }
    }

    /// Sets the start and end lines (builder).
    #[must_use]
    pub fn lines(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the toggle actions (builder).
    #[must_use]
    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }
}

/// When a reveal starts playing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Trigger<H> {
    /// Play forward as soon as the reveal is registered (after its delay).
    OnMount,
    /// Play and reverse according to scroll crossings.
    Scroll(ScrollTrigger<H>),
}

#[cfg(test)]
mod tests {
    use vista_viewport::geometry::TriggerZone::{Active, After, Before};

    use super::{Crossing, ToggleAction, ToggleActions};

    #[test]
    fn single_line_crossings() {
        assert_eq!(Crossing::between(Before, Active).as_slice(), &[Crossing::Enter]);
        assert_eq!(Crossing::between(Active, After).as_slice(), &[Crossing::Leave]);
        assert_eq!(Crossing::between(After, Active).as_slice(), &[Crossing::EnterBack]);
        assert_eq!(Crossing::between(Active, Before).as_slice(), &[Crossing::LeaveBack]);
    }

    #[test]
    fn fast_scroll_produces_both_crossings_in_order() {
        assert_eq!(
            Crossing::between(Before, After).as_slice(),
            &[Crossing::Enter, Crossing::Leave]
        );
        assert_eq!(
            Crossing::between(After, Before).as_slice(),
            &[Crossing::EnterBack, Crossing::LeaveBack]
        );
    }

    #[test]
    fn staying_in_a_zone_crosses_nothing() {
        for zone in [Before, Active, After] {
            assert!(Crossing::between(zone, zone).is_empty());
        }
    }

    #[test]
    fn default_actions_play_then_reverse() {
        let actions = ToggleActions::default();
        assert_eq!(actions.action_for(Crossing::Enter), ToggleAction::Play);
        assert_eq!(actions.action_for(Crossing::Leave), ToggleAction::None);
        assert_eq!(actions.action_for(Crossing::EnterBack), ToggleAction::None);
        assert_eq!(actions.action_for(Crossing::LeaveBack), ToggleAction::Reverse);
    }
}
