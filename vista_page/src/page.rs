// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use vista_form::ContactForm;
use vista_nav::{NavItem, ScrollHost, SectionNavigator};
use vista_reveal::timeline::Timeline;
use vista_reveal::{PropertySink, RevealAnimator, RevealEvent, RevealSpec, ScopeId};
use vista_viewport::{Chrome, LayoutHost, ScrollChanges, ScrollState, SectionError, ViewportTracker};

use crate::config::{PageConfig, SectionKind};
use crate::element::Element;
use crate::showcase::Showcase;

/// Why a page could not be mounted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Two sections share an id.
    #[error(transparent)]
    Section(#[from] SectionError<Element>),
    /// A nav item, the home button, or the call to action names a section
    /// the page does not have.
    #[error("navigation target {0:?} is not a section of this page")]
    UnknownTarget(String),
    /// Two projects share an id, so the dialog could not tell them apart.
    #[error("project id {0} is used more than once")]
    DuplicateProject(u32),
}

/// What one scroll or resize changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    /// Which parts of the scroll state changed.
    pub changes: ScrollChanges,
    /// Reveal toggles fired by this scroll.
    pub reveals: Vec<RevealEvent<Element>>,
}

/// A mounted single-page portfolio.
///
/// Mounting registers every section with a [`ViewportTracker`], wires a
/// [`SectionNavigator`] to it, and registers the reveals for each section's
/// layout in one animator scope. The host then forwards scroll events to
/// [`Self::on_scroll`] and animation frames to [`Self::tick`].
///
/// Per scroll event the tracker recomputes first, then the navigator sees the
/// new state, then reveals are checked against the same geometry.
///
/// Unmounting (explicitly, or by dropping the page) releases the reveal
/// scope; no element is written after that.
#[derive(Debug)]
pub struct PortfolioPage {
    config: PageConfig,
    tracker: ViewportTracker<Element>,
    navigator: SectionNavigator<Element>,
    animator: RevealAnimator<Element>,
    scope: Option<ScopeId>,
    showcase: Showcase,
    contact: ContactForm,
}

impl PortfolioPage {
    /// Composes and mounts a page described by `config`.
    ///
    /// Elements that are not attached yet are skipped for reveal purposes.
    /// Reveals start at their offset state; call [`Self::tick`] (or
    /// [`Self::flush`]) to render it. The host's current scroll position is
    /// read once, so a page loaded mid-scroll starts with the right active
    /// section and plays the reveals already above their start lines.
    ///
    /// # Errors
    ///
    /// See [`PageError`]. Nothing stays registered when mounting fails.
    pub fn mount<H>(config: PageConfig, host: &H) -> Result<Self, PageError>
    where
        H: LayoutHost<Element> + ?Sized,
    {
        let mut tracker = ViewportTracker::with_config(config.tracker);
        if let Some(first) = config.sections.first() {
            tracker = tracker.with_initial_active(Element::section(first.id.as_str()));
        }
        for section in &config.sections {
            tracker.register_section(Element::section(section.id.as_str()))?;
        }

        for target in config
            .nav_items
            .iter()
            .map(|item| &item.section)
            .chain([&config.home, &config.call_to_action])
        {
            if config.section(target).is_none() {
                return Err(PageError::UnknownTarget(target.clone()));
            }
        }
        let items = config
            .nav_items
            .iter()
            .map(|item| NavItem::new(Element::section(item.section.as_str()), item.label.as_str()))
            .collect();
        let navigator = SectionNavigator::with_config(items, config.nav);

        let mut seen = Vec::with_capacity(config.projects.len());
        for project in &config.projects {
            if seen.contains(&project.id) {
                return Err(PageError::DuplicateProject(project.id));
            }
            seen.push(project.id);
        }

        let mut animator = RevealAnimator::new();
        let (scope, ()) = animator.scoped(host, |scope| {
            for section in &config.sections {
                let id = Element::section(section.id.as_str());
                match section.kind {
                    SectionKind::Hero => {
                        let hero = Timeline::hero(
                            Element::HeroTitle,
                            Element::HeroSubtitle,
                            Element::HeroCta,
                        );
                        for (element, spec) in hero.into_reveals() {
                            scope.register(element, spec);
                        }
                    }
                    SectionKind::About => {
                        scope.register(Element::AboutImage, RevealSpec::side(id.clone(), true));
                        scope.register(Element::AboutContent, RevealSpec::side(id, false));
                    }
                    SectionKind::Projects => {
                        for index in (0_u32..).take(config.projects.len()) {
                            scope.register(Element::ProjectCard(index), RevealSpec::card(index));
                        }
                    }
                    SectionKind::Contact => {
                        scope.register(Element::ContactForm, RevealSpec::rise_with(id));
                    }
                }
            }
            Ok::<_, PageError>(())
        })?;

        tracing::info!(
            title = %config.title,
            sections = config.sections.len(),
            reveals = animator.len(),
            "page mounted"
        );
        let mut page = Self {
            showcase: Showcase::new(config.projects.clone()),
            config,
            tracker,
            navigator,
            animator,
            scope: Some(scope),
            contact: ContactForm::new(),
        };
        // The page may load mid-scroll.
        let initial = page.on_scroll(host);
        tracing::debug!(
            active = ?page.tracker.state().active_section,
            reveals = initial.reveals.len(),
            "initial scroll state"
        );
        Ok(page)
    }

    /// Handles a scroll or resize of the host.
    pub fn on_scroll<H>(&mut self, host: &H) -> ScrollUpdate
    where
        H: LayoutHost<Element> + ?Sized,
    {
        let changes = self.tracker.dispatch(host, &mut [&mut self.navigator]);
        let reveals = self.animator.observe(host);
        ScrollUpdate { changes, reveals }
    }

    /// Advances reveals by one animation frame and writes their properties.
    pub fn tick<S>(&mut self, dt: Duration, sink: &mut S) -> Vec<RevealEvent<Element>>
    where
        S: PropertySink<Element> + ?Sized,
    {
        self.animator.tick(dt, sink)
    }

    /// Writes pending reveal state without advancing time.
    pub fn flush<S>(&mut self, sink: &mut S) -> Vec<RevealEvent<Element>>
    where
        S: PropertySink<Element> + ?Sized,
    {
        self.animator.flush(sink)
    }

    /// Scrolls to the section with `id`. Unknown ids are ignored.
    pub fn navigate<H>(&mut self, id: &str, host: &mut H) -> Option<f64>
    where
        H: ScrollHost<Element> + ?Sized,
    {
        self.navigator.scroll_to_section(&Element::section(id), host)
    }

    /// The brand button: scrolls to the home section.
    pub fn go_home<H>(&mut self, host: &mut H) -> Option<f64>
    where
        H: ScrollHost<Element> + ?Sized,
    {
        let home = Element::section(self.config.home.as_str());
        self.navigator.scroll_to_section(&home, host)
    }

    /// The hero call to action.
    pub fn follow_call_to_action<H>(&mut self, host: &mut H) -> Option<f64>
    where
        H: ScrollHost<Element> + ?Sized,
    {
        let target = Element::section(self.config.call_to_action.as_str());
        self.navigator.scroll_to_section(&target, host)
    }

    /// Releases every reveal and reports how many were released.
    ///
    /// Equivalent to dropping the page, but with a count.
    pub fn unmount(mut self) -> usize {
        self.teardown()
    }

    /// The configuration the page was mounted with.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Latest scroll state.
    #[must_use]
    pub fn scroll_state(&self) -> &ScrollState<Element> {
        self.tracker.state()
    }

    /// Navbar chrome for the latest scroll state.
    #[must_use]
    pub fn chrome(&self) -> Chrome {
        self.tracker.state().chrome()
    }

    /// Navigation state.
    #[must_use]
    pub fn navigator(&self) -> &SectionNavigator<Element> {
        &self.navigator
    }

    /// Navigation state, for opening and dismissing the mobile overlay.
    pub fn navigator_mut(&mut self) -> &mut SectionNavigator<Element> {
        &mut self.navigator
    }

    /// Registered reveals.
    #[must_use]
    pub fn animator(&self) -> &RevealAnimator<Element> {
        &self.animator
    }

    /// Project showcase.
    #[must_use]
    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    /// Project showcase, for opening and closing the dialog.
    pub fn showcase_mut(&mut self) -> &mut Showcase {
        &mut self.showcase
    }

    /// Contact form.
    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Contact form, for editing and submitting.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    fn teardown(&mut self) -> usize {
        let Some(scope) = self.scope.take() else {
            return 0;
        };
        let released = self.animator.release_scope(scope).unwrap_or_default();
        tracing::info!(title = %self.config.title, released, "page unmounted");
        released
    }
}

impl Drop for PortfolioPage {
    fn drop(&mut self) {
        self.teardown();
    }
}
