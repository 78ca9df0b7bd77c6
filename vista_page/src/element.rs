// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Handle for every element a page tracks, scrolls to, or animates.
///
/// Hosts map these to their own nodes when answering layout queries and
/// applying visual properties.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// A top-level section, by id.
    Section(String),
    /// Hero heading.
    HeroTitle,
    /// Hero tagline.
    HeroSubtitle,
    /// Hero call-to-action row.
    HeroCta,
    /// Portrait in the about section.
    AboutImage,
    /// Text column in the about section.
    AboutContent,
    /// Card for the project at this position in the showcase.
    ProjectCard(u32),
    /// The contact form.
    ContactForm,
}

impl Element {
    /// The section with `id`.
    #[must_use]
    pub fn section(id: impl Into<String>) -> Self {
        Self::Section(id.into())
    }

    /// The section id, if this is a section.
    #[must_use]
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Section(id) => Some(id),
            _ => None,
        }
    }
}
