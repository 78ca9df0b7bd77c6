// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::time::Duration;

use hashbrown::HashSet;
use vista_viewport::LayoutHost;
use vista_viewport::geometry::{TriggerZone, viewport_line};

use crate::props::{PropertyMask, VisualProps};
use crate::spec::{AnimationSpec, RevealSpec};
use crate::trigger::{Crossing, ToggleAction, Trigger};
use crate::tween::{Direction, Tween};

/// Receives visual property updates for elements.
///
/// Only the properties in `mask` should be written; other properties on the
/// element may be owned by a different reveal. Implemented for any
/// `FnMut(&H, VisualProps, PropertyMask)` closure.
pub trait PropertySink<H> {
    /// Writes `props` (restricted to `mask`) to `element`.
    fn apply(&mut self, element: &H, props: VisualProps, mask: PropertyMask);
}

impl<H, F> PropertySink<H> for F
where
    F: FnMut(&H, VisualProps, PropertyMask),
{
    fn apply(&mut self, element: &H, props: VisualProps, mask: PropertyMask) {
        self(element, props, mask);
    }
}

/// Playback state of a registered reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// Registered, sitting at its offset state, never played.
    Idle,
    /// Moving toward rest (possibly still waiting out its delay).
    PlayingForward,
    /// Moving back toward the offset state.
    PlayingReverse,
    /// At rest.
    SettledForward,
    /// Back at the offset state after a reverse.
    SettledReverse,
}

impl PlayState {
    /// Whether a tween is in flight.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::PlayingForward | Self::PlayingReverse)
    }
}

/// Identifies a group of reveals that are released together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The scope every animator starts with.
    pub const ROOT: Self = Self(0);
}

/// Errors from scope operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// The scope was never opened or has already been released.
    #[error("reveal scope {0:?} is not open")]
    NotOpen(ScopeId),
}

/// Something observable that happened to a reveal.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealEvent<H> {
    /// A scroll crossing fired a non-`None` toggle action.
    Triggered {
        /// The animated element.
        element: H,
        /// Which line was crossed, and in which direction.
        crossing: Crossing,
        /// The action that ran.
        action: ToggleAction,
        /// Play state after the action.
        state: PlayState,
    },
    /// A tween reached its endpoint.
    Settled {
        /// The animated element.
        element: H,
        /// [`PlayState::SettledForward`] or [`PlayState::SettledReverse`].
        state: PlayState,
    },
}

#[derive(Clone, Debug)]
struct RevealTarget<H> {
    element: H,
    scope: ScopeId,
    animation: AnimationSpec,
    trigger: Trigger<H>,
    tween: Tween,
    state: PlayState,
    zone: Option<TriggerZone>,
    /// Props must be written on the next tick even if nothing is moving.
    dirty: bool,
}

impl<H: Debug> RevealTarget<H> {
    fn props(&self) -> VisualProps {
        self.animation.props_at(self.tween.value())
    }

    fn play_forward(&mut self) {
        // The stagger/entrance delay only applies to a pass that starts from
        // the offset state; redirecting a reverse mid-flight starts at once.
        let delay = if self.tween.is_at_start() {
            self.animation.total_delay()
        } else {
            Duration::ZERO
        };
        self.tween.play(Direction::Forward, delay);
        self.set_state(if self.tween.is_running() {
            PlayState::PlayingForward
        } else {
            PlayState::SettledForward
        });
    }

    fn play_reverse(&mut self) {
        self.tween.play(Direction::Reverse, Duration::ZERO);
        self.set_state(if self.tween.is_running() {
            PlayState::PlayingReverse
        } else {
            PlayState::SettledReverse
        });
    }

    /// Runs `action`, honoring the play-state guards. Returns `true` if it
    /// did anything.
    fn apply(&mut self, action: ToggleAction) -> bool {
        match action {
            ToggleAction::None => return false,
            ToggleAction::Play => {
                if !matches!(
                    self.state,
                    PlayState::Idle | PlayState::SettledReverse | PlayState::PlayingReverse
                ) {
                    return false;
                }
                self.play_forward();
            }
            ToggleAction::Reverse => {
                if !matches!(
                    self.state,
                    PlayState::SettledForward | PlayState::PlayingForward
                ) {
                    return false;
                }
                self.play_reverse();
            }
            ToggleAction::Restart => {
                self.tween.seek_start();
                self.play_forward();
            }
            ToggleAction::Reset => {
                self.tween.seek_start();
                self.set_state(PlayState::Idle);
            }
            ToggleAction::Complete => {
                self.tween.seek_end();
                self.set_state(PlayState::SettledForward);
            }
        }
        self.dirty = true;
        true
    }

    fn set_state(&mut self, state: PlayState) {
        if self.state != state {
            tracing::debug!(element = ?self.element, from = ?self.state, to = ?state, "reveal state");
            self.state = state;
        }
    }
}

/// Registry of scroll-triggered (and mount-triggered) entrance animations.
///
/// The animator exclusively owns its reveal registry; elements are only
/// referenced by handle. It is driven by three calls:
///
/// - [`RevealAnimator::observe`] after every scroll/resize, which turns
///   trigger-line crossings into play/reverse commands;
/// - [`RevealAnimator::tick`] once per animation frame, which advances
///   in-flight tweens and writes properties to a [`PropertySink`];
/// - [`RevealAnimator::release_scope`] / [`RevealAnimator::unregister`] on
///   teardown, after which the released elements are never written again.
///
/// Each element/property pair has at most one tween. A new command on an
/// in-flight tween redirects it from where it is (last writer wins), and
/// registering a reveal whose properties overlap an existing reveal on the
/// same element replaces that reveal.
///
/// Events are collected while iterating and returned afterwards, so nothing
/// observes or mutates the registry mid-iteration.
pub struct RevealAnimator<H> {
    targets: Vec<RevealTarget<H>>,
    open_scopes: HashSet<ScopeId>,
    next_scope: u32,
}

impl<H: Debug> Debug for RevealAnimator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealAnimator")
            .field("targets", &self.targets.len())
            .field("open_scopes", &self.open_scopes.len())
            .field("animating", &self.is_animating())
            .finish()
    }
}

impl<H> RevealAnimator<H> {
    /// Number of registered reveals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no reveals are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether any tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.targets.iter().any(|t| t.tween.is_running())
    }
}

impl<H: Clone + PartialEq + Debug> RevealAnimator<H> {
    /// Creates an empty animator with only [`ScopeId::ROOT`] open.
    #[must_use]
    pub fn new() -> Self {
        let mut open_scopes = HashSet::new();
        open_scopes.insert(ScopeId::ROOT);
        Self {
            targets: Vec::new(),
            open_scopes,
            next_scope: 1,
        }
    }

    /// Play state of the first reveal registered on `element`.
    #[must_use]
    pub fn play_state(&self, element: &H) -> Option<PlayState> {
        self.find(element).map(|t| t.state)
    }

    /// Current visual state of the first reveal registered on `element`.
    #[must_use]
    pub fn props(&self, element: &H) -> Option<VisualProps> {
        self.find(element).map(RevealTarget::props)
    }

    /// Iterates over `(element, play state)` in registration order.
    pub fn states(&self) -> impl Iterator<Item = (&H, PlayState)> + '_ {
        self.targets.iter().map(|t| (&t.element, t.state))
    }

    /// Opens a new scope.
    pub fn begin_scope(&mut self) -> ScopeId {
        // Ids are never reused while open; zero is the root.
        let mut id = self.next_scope;
        while id == 0 || self.open_scopes.contains(&ScopeId(id)) {
            id = id.wrapping_add(1);
        }
        self.next_scope = id.wrapping_add(1);
        let scope = ScopeId(id);
        self.open_scopes.insert(scope);
        scope
    }

    /// Whether `scope` is open.
    #[must_use]
    pub fn is_open(&self, scope: ScopeId) -> bool {
        self.open_scopes.contains(&scope)
    }

    /// Registers a reveal in [`ScopeId::ROOT`]. See [`Self::register_in`].
    pub fn register<L>(&mut self, host: &L, element: H, spec: RevealSpec<H>) -> bool
    where
        L: LayoutHost<H> + ?Sized,
    {
        self.insert(ScopeId::ROOT, host, element, spec)
    }

    /// Registers a reveal for `element` in `scope`.
    ///
    /// The element is immediately scheduled to render at its offset state;
    /// [`Trigger::OnMount`] reveals also start playing. Returns `Ok(false)`
    /// without registering anything if the element is not attached.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::NotOpen`] if `scope` is not open.
    pub fn register_in<L>(
        &mut self,
        scope: ScopeId,
        host: &L,
        element: H,
        spec: RevealSpec<H>,
    ) -> Result<bool, ScopeError>
    where
        L: LayoutHost<H> + ?Sized,
    {
        if !self.is_open(scope) {
            return Err(ScopeError::NotOpen(scope));
        }
        Ok(self.insert(scope, host, element, spec))
    }

    /// Opens a scope, lets `build` register reveals into it, and returns the
    /// scope id.
    ///
    /// If `build` fails the scope is released before the error is returned,
    /// so a half-built group never lingers.
    ///
    /// # Errors
    ///
    /// Returns whatever `build` returns.
    pub fn scoped<L, R, E>(
        &mut self,
        host: &L,
        build: impl FnOnce(&mut ScopeBuilder<'_, H, L>) -> Result<R, E>,
    ) -> Result<(ScopeId, R), E>
    where
        L: LayoutHost<H> + ?Sized,
    {
        let scope = self.begin_scope();
        let result = build(&mut ScopeBuilder {
            animator: self,
            host,
            scope,
        });
        match result {
            Ok(value) => Ok((scope, value)),
            Err(err) => {
                self.release_members(scope);
                self.open_scopes.remove(&scope);
                Err(err)
            }
        }
    }

    /// Removes every reveal on `element`, cancelling in-flight tweens.
    ///
    /// Returns `true` if anything was removed. The element is not written
    /// again, not even to restore it.
    pub fn unregister(&mut self, element: &H) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| &t.element != element);
        let removed = before - self.targets.len();
        if removed > 0 {
            tracing::debug!(element = ?element, removed, "unregistered reveal");
        }
        removed > 0
    }

    /// Releases every reveal in `scope` and closes it. Returns how many
    /// reveals were released.
    ///
    /// [`ScopeId::ROOT`] is emptied but stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::NotOpen`] if `scope` is not open.
    pub fn release_scope(&mut self, scope: ScopeId) -> Result<usize, ScopeError> {
        if !self.is_open(scope) {
            return Err(ScopeError::NotOpen(scope));
        }
        let released = self.release_members(scope);
        if scope != ScopeId::ROOT {
            self.open_scopes.remove(&scope);
        }
        tracing::debug!(?scope, released, "released reveal scope");
        Ok(released)
    }

    /// Releases every reveal in every scope and closes all but the root.
    pub fn release_all(&mut self) -> usize {
        let released = self.targets.len();
        self.targets.clear();
        self.open_scopes.retain(|s| *s == ScopeId::ROOT);
        tracing::debug!(released, "released all reveal scopes");
        released
    }

    /// Checks every scroll-triggered reveal against the host geometry and
    /// runs the toggle actions for any crossings since the last call.
    ///
    /// Reveals whose trigger element is not attached are skipped and keep
    /// their last known zone. The first observation of a reveal treats it as
    /// coming from below the start line.
    pub fn observe<L>(&mut self, host: &L) -> Vec<RevealEvent<H>>
    where
        L: LayoutHost<H> + ?Sized,
    {
        let viewport_height = host.viewport_height();
        let mut events = Vec::new();
        for target in &mut self.targets {
            let (rect, start, end, actions) = match &target.trigger {
                Trigger::OnMount => continue,
                Trigger::Scroll(trigger) => {
                    let watched = trigger.element.as_ref().unwrap_or(&target.element);
                    (
                        host.bounding_rect(watched),
                        trigger.start,
                        trigger.end,
                        trigger.actions,
                    )
                }
            };
            let Some(rect) = rect else {
                continue;
            };
            let zone = TriggerZone::classify(
                rect.y0,
                viewport_line(viewport_height, start),
                viewport_line(viewport_height, end),
            );
            let previous = target.zone.replace(zone).unwrap_or(TriggerZone::Before);
            for crossing in Crossing::between(previous, zone) {
                let action = actions.action_for(crossing);
                if target.apply(action) {
                    events.push(RevealEvent::Triggered {
                        element: target.element.clone(),
                        crossing,
                        action,
                        state: target.state,
                    });
                }
            }
        }
        events
    }

    /// Advances every in-flight tween by `dt` and writes the resulting
    /// properties to `sink`.
    ///
    /// Reveals that are waiting out a delay are not written (they already
    /// sit at their offset state); reveals that changed state since the last
    /// tick are written once even if they are not moving.
    pub fn tick<S>(&mut self, dt: Duration, sink: &mut S) -> Vec<RevealEvent<H>>
    where
        S: PropertySink<H> + ?Sized,
    {
        let mut events = Vec::new();
        for target in &mut self.targets {
            let was_running = target.tween.is_running();
            let finished = target.tween.tick(dt);
            let moved = was_running && !target.tween.is_delayed();
            if finished {
                let settled = match target.tween.direction() {
                    Direction::Forward => PlayState::SettledForward,
                    Direction::Reverse => PlayState::SettledReverse,
                };
                target.set_state(settled);
                events.push(RevealEvent::Settled {
                    element: target.element.clone(),
                    state: settled,
                });
            }
            if moved || target.dirty {
                sink.apply(&target.element, target.props(), target.animation.properties);
                target.dirty = false;
            }
        }
        events
    }

    /// Writes pending state changes without advancing time.
    pub fn flush<S>(&mut self, sink: &mut S) -> Vec<RevealEvent<H>>
    where
        S: PropertySink<H> + ?Sized,
    {
        self.tick(Duration::ZERO, sink)
    }

    fn find(&self, element: &H) -> Option<&RevealTarget<H>> {
        self.targets.iter().find(|t| &t.element == element)
    }

    fn insert<L>(&mut self, scope: ScopeId, host: &L, element: H, spec: RevealSpec<H>) -> bool
    where
        L: LayoutHost<H> + ?Sized,
    {
        if host.bounding_rect(&element).is_none() {
            tracing::trace!(element = ?element, "skipped reveal for detached element");
            return false;
        }
        let mask = spec.animation.properties;
        self.targets
            .retain(|t| !(t.element == element && t.animation.properties.intersects(mask)));

        let mut target = RevealTarget {
            tween: Tween::new(spec.animation.duration, spec.animation.easing),
            element,
            scope,
            animation: spec.animation,
            trigger: spec.trigger,
            state: PlayState::Idle,
            zone: None,
            dirty: true,
        };
        if matches!(target.trigger, Trigger::OnMount) {
            target.play_forward();
        }
        tracing::trace!(element = ?target.element, ?scope, "registered reveal");
        self.targets.push(target);
        true
    }

    fn release_members(&mut self, scope: ScopeId) -> usize {
        let before = self.targets.len();
        self.targets.retain(|t| t.scope != scope);
        before - self.targets.len()
    }
}

impl<H: Clone + PartialEq + Debug> Default for RevealAnimator<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers reveals into one scope; handed out by [`RevealAnimator::scoped`].
pub struct ScopeBuilder<'a, H, L: ?Sized> {
    animator: &'a mut RevealAnimator<H>,
    host: &'a L,
    scope: ScopeId,
}

impl<H, L: ?Sized> Debug for ScopeBuilder<'_, H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeBuilder")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<H, L> ScopeBuilder<'_, H, L>
where
    H: Clone + PartialEq + Debug,
    L: LayoutHost<H> + ?Sized,
{
    /// The scope being built.
    #[must_use]
    pub fn id(&self) -> ScopeId {
        self.scope
    }

    /// Registers a reveal into this scope. Returns `false` if the element is
    /// not attached.
    pub fn register(&mut self, element: H, spec: RevealSpec<H>) -> bool {
        self.animator.insert(self.scope, self.host, element, spec)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;

    use vista_viewport::{LayoutHost, Rect};

    use super::{PlayState, PropertySink, RevealAnimator, RevealEvent, ScopeError, ScopeId};
    use crate::props::{PropertyMask, VisualProps};
    use crate::spec::{AnimationSpec, RevealSpec};
    use crate::trigger::{Crossing, ToggleAction};

    /// Viewport-relative tops for a handful of named elements.
    struct Page {
        viewport_height: f64,
        elements: Vec<(&'static str, f64)>,
    }

    impl Page {
        fn new(elements: &[(&'static str, f64)]) -> Self {
            Self {
                viewport_height: 1000.0,
                elements: elements.to_vec(),
            }
        }

        fn move_to(&mut self, element: &str, top: f64) {
            for (name, y) in &mut self.elements {
                if *name == element {
                    *y = top;
                }
            }
        }
    }

    impl LayoutHost<&'static str> for Page {
        fn scroll_offset(&self) -> f64 {
            0.0
        }

        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn bounding_rect(&self, element: &&'static str) -> Option<Rect> {
            self.elements
                .iter()
                .find(|(name, _)| name == element)
                .map(|(_, top)| Rect::new(0.0, *top, 400.0, top + 300.0))
        }
    }

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(&'static str, VisualProps, PropertyMask)>,
    }

    impl PropertySink<&'static str> for Recorder {
        fn apply(&mut self, element: &&'static str, props: VisualProps, mask: PropertyMask) {
            self.writes.push((*element, props, mask));
        }
    }

    const CARD_FROM: VisualProps = VisualProps::below(80.0);
    const CARD_PASS: Duration = Duration::from_millis(800);

    fn card_page() -> (Page, RevealAnimator<&'static str>) {
        let page = Page::new(&[("card", 900.0)]);
        let mut animator = RevealAnimator::new();
        assert!(animator.register(&page, "card", RevealSpec::card(0)));
        assert!(animator.observe(&page).is_empty());
        (page, animator)
    }

    #[test]
    fn crossing_start_line_plays_and_settles_at_rest() {
        let (mut page, mut animator) = card_page();
        let mut sink = Recorder::default();

        page.move_to("card", 800.0);
        let events = animator.observe(&page);
        assert_eq!(
            events,
            [RevealEvent::Triggered {
                element: "card",
                crossing: Crossing::Enter,
                action: ToggleAction::Play,
                state: PlayState::PlayingForward,
            }]
        );

        let events = animator.tick(CARD_PASS, &mut sink);
        assert_eq!(
            events,
            [RevealEvent::Settled {
                element: "card",
                state: PlayState::SettledForward,
            }]
        );
        assert_eq!(animator.props(&"card"), Some(VisualProps::REST));
        let (_, last, mask) = sink.writes.last().copied().unwrap();
        assert_eq!(last, VisualProps::REST);
        assert_eq!(mask, PropertyMask::TRANSLATE_Y | PropertyMask::OPACITY);
    }

    #[test]
    fn scrolling_back_up_reverses_to_offset_state() {
        let (mut page, mut animator) = card_page();
        let mut sink = Recorder::default();
        page.move_to("card", 800.0);
        animator.observe(&page);
        animator.tick(CARD_PASS, &mut sink);

        page.move_to("card", 900.0);
        let events = animator.observe(&page);
        assert!(matches!(
            events.as_slice(),
            [RevealEvent::Triggered {
                crossing: Crossing::LeaveBack,
                action: ToggleAction::Reverse,
                ..
            }]
        ));
        animator.tick(CARD_PASS, &mut sink);
        assert_eq!(animator.play_state(&"card"), Some(PlayState::SettledReverse));
        assert_eq!(animator.props(&"card"), Some(CARD_FROM));
    }

    #[test]
    fn repeated_observation_in_zone_is_idempotent() {
        let (mut page, mut animator) = card_page();
        page.move_to("card", 800.0);
        assert_eq!(animator.observe(&page).len(), 1);
        assert!(animator.observe(&page).is_empty());
        page.move_to("card", 700.0);
        assert!(animator.observe(&page).is_empty());
        assert_eq!(animator.play_state(&"card"), Some(PlayState::PlayingForward));
    }

    #[test]
    fn reversing_mid_flight_redirects_from_current_position() {
        let (mut page, mut animator) = card_page();
        let mut sink = Recorder::default();
        page.move_to("card", 800.0);
        animator.observe(&page);
        animator.tick(CARD_PASS / 2, &mut sink);
        let midway = animator.props(&"card").unwrap();
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

        page.move_to("card", 900.0);
        animator.observe(&page);
        assert_eq!(animator.play_state(&"card"), Some(PlayState::PlayingReverse));
        assert_eq!(animator.props(&"card"), Some(midway));

        // Only the distance already covered has to be undone.
        let events = animator.tick(CARD_PASS / 2, &mut sink);
        assert_eq!(events.len(), 1);
        assert_eq!(animator.props(&"card"), Some(CARD_FROM));
    }

    #[test]
    fn play_while_reversing_overrides_without_delay() {
        let mut page = Page::new(&[("card", 900.0)]);
        let mut animator = RevealAnimator::new();
        let mut sink = Recorder::default();
        animator.register(&page, "card", RevealSpec::card(2));
        page.move_to("card", 800.0);
        animator.observe(&page);
        // Waiting out the 400ms stagger.
        animator.tick(Duration::from_millis(400) + CARD_PASS / 2, &mut sink);
        page.move_to("card", 900.0);
        animator.observe(&page);
        page.move_to("card", 800.0);
        animator.observe(&page);
        assert_eq!(animator.play_state(&"card"), Some(PlayState::PlayingForward));
        animator.tick(CARD_PASS / 2, &mut sink);
        assert_eq!(animator.play_state(&"card"), Some(PlayState::SettledForward));
    }

    #[test]
    fn jumping_past_both_lines_still_plays_once() {
        let (mut page, mut animator) = card_page();
        page.move_to("card", 100.0);
        let events = animator.observe(&page);
        let actions: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Triggered { action, .. } => Some(*action),
                RevealEvent::Settled { .. } => None,
            })
            .collect();
        assert_eq!(actions, [ToggleAction::Play]);
    }

    #[test]
    fn registration_renders_offset_state_once() {
        let page = Page::new(&[("card", 900.0)]);
        let mut animator = RevealAnimator::new();
        let mut sink = Recorder::default();
        animator.register(&page, "card", RevealSpec::card(0));
        animator.flush(&mut sink);
        animator.flush(&mut sink);
        assert_eq!(sink.writes.len(), 1);
        assert_eq!(sink.writes[0].1, CARD_FROM);
    }

    #[test]
    fn detached_elements_are_not_registered() {
        let page = Page::new(&[]);
        let mut animator = RevealAnimator::new();
        assert!(!animator.register(&page, "ghost", RevealSpec::card(0)));
        assert!(animator.is_empty());
    }

    #[test]
    fn teardown_stops_all_writes() {
        let (mut page, mut animator) = card_page();
        let mut sink = Recorder::default();
        page.move_to("card", 800.0);
        animator.observe(&page);
        animator.tick(CARD_PASS / 4, &mut sink);
        let written = sink.writes.len();

        assert!(animator.unregister(&"card"));
        animator.tick(CARD_PASS, &mut sink);
        page.move_to("card", 900.0);
        assert!(animator.observe(&page).is_empty());
        animator.tick(CARD_PASS, &mut sink);
        assert_eq!(sink.writes.len(), written);
    }

    #[test]
    fn mount_reveal_waits_out_its_delay() {
        let page = Page::new(&[("title", 200.0)]);
        let mut animator = RevealAnimator::new();
        let mut sink = Recorder::default();
        let spec = AnimationSpec::rise(100.0, Duration::from_millis(1200))
            .delay(Duration::from_millis(300));
        animator.register(&page, "title", RevealSpec::on_mount(spec));
        assert_eq!(animator.play_state(&"title"), Some(PlayState::PlayingForward));

        animator.flush(&mut sink);
        assert_eq!(sink.writes.len(), 1);
        animator.tick(Duration::from_millis(200), &mut sink);
        assert_eq!(sink.writes.len(), 1);
        animator.tick(Duration::from_millis(200), &mut sink);
        assert_eq!(sink.writes.len(), 2);
        assert!(sink.writes[1].1.translate_y < 100.0);
    }

    #[test]
    fn section_trigger_watches_the_section() {
        let mut page = Page::new(&[("about", 900.0), ("about-text", 1200.0)]);
        let mut animator = RevealAnimator::new();
        animator.register(&page, "about-text", RevealSpec::side("about", true));
        animator.observe(&page);
        page.move_to("about", 650.0);
        animator.observe(&page);
        assert_eq!(
            animator.play_state(&"about-text"),
            Some(PlayState::PlayingForward)
        );
    }

    #[test]
    fn overlapping_registration_replaces() {
        let page = Page::new(&[("card", 900.0)]);
        let mut animator = RevealAnimator::new();
        animator.register(&page, "card", RevealSpec::card(0));
        animator.register(&page, "card", RevealSpec::card(1));
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn failed_scope_is_released() {
        let page = Page::new(&[("a", 900.0), ("b", 900.0)]);
        let mut animator = RevealAnimator::new();
        let mut opened = None;
        let result: Result<(ScopeId, ()), &str> = animator.scoped(&page, |scope| {
            opened = Some(scope.id());
            scope.register("a", RevealSpec::card(0));
            scope.register("b", RevealSpec::card(1));
            Err("layout not ready")
        });
        assert_eq!(result, Err("layout not ready"));
        assert!(animator.is_empty());
        let scope = opened.unwrap();
        assert!(!animator.is_open(scope));
        assert_eq!(animator.release_scope(scope), Err(ScopeError::NotOpen(scope)));
    }

    #[test]
    fn released_scope_leaves_other_scopes_alone() {
        let page = Page::new(&[("a", 900.0), ("b", 900.0)]);
        let mut animator = RevealAnimator::new();
        animator.register(&page, "a", RevealSpec::card(0));
        let (scope, ()) = animator
            .scoped(&page, |scope| {
                scope.register("b", RevealSpec::card(0));
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(animator.release_scope(scope), Ok(1));
        assert_eq!(animator.len(), 1);
        assert_eq!(animator.release_scope(ScopeId::ROOT), Ok(1));
        assert!(animator.is_open(ScopeId::ROOT));
        assert!(animator.is_empty());
    }

    #[test]
    fn register_in_requires_an_open_scope() {
        let page = Page::new(&[("a", 900.0)]);
        let mut animator = RevealAnimator::new();
        let scope = animator.begin_scope();
        assert_eq!(animator.register_in(scope, &page, "a", RevealSpec::card(0)), Ok(true));
        assert_eq!(animator.register_in(scope, &page, "ghost", RevealSpec::card(0)), Ok(false));
        assert_eq!(animator.release_scope(scope), Ok(1));
        assert_eq!(
            animator.register_in(scope, &page, "a", RevealSpec::card(0)),
            Err(ScopeError::NotOpen(scope))
        );
        assert!(animator.is_empty());
    }

    #[test]
    fn scope_ids_wrap_without_reusing_open_scopes() {
        let mut animator: RevealAnimator<&'static str> = RevealAnimator::new();
        animator.next_scope = u32::MAX;
        let last = animator.begin_scope();
        let wrapped = animator.begin_scope();
        assert_eq!(last, ScopeId(u32::MAX));
        assert_eq!(wrapped, ScopeId(1));

        animator.next_scope = 1;
        assert_eq!(animator.begin_scope(), ScopeId(2));
        assert_eq!(animator.release_all(), 0);
        assert!(!animator.is_open(last));
        assert!(animator.is_open(ScopeId::ROOT));
    }

    #[test]
    fn debug_summary_reports_animation() {
        let (mut page, mut animator) = card_page();
        page.move_to("card", 800.0);
        animator.observe(&page);
        let summary = alloc::format!("{animator:?}");
        assert!(summary.contains("animating: true"), "{summary}");
    }
}
