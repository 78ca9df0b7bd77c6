// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vista_nav::{NavConfig, NavItem};
use vista_viewport::TrackerConfig;

use crate::showcase::Project;

/// Which built-in layout a section uses. Decides what gets revealed in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SectionKind {
    /// Full-height intro with a mount-time entrance timeline.
    Hero,
    /// Portrait and text sliding in from opposite sides.
    About,
    /// Staggered project cards and a detail dialog.
    Projects,
    /// Contact form rising into place.
    Contact,
}

/// A section of the page, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionConfig {
    /// Element id; also what navigation targets.
    pub id: String,
    /// Layout of the section.
    pub kind: SectionKind,
}

impl SectionConfig {
    /// Creates a section.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// An outbound profile link shown next to the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialLink {
    /// Accessible name.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Everything needed to compose a page.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Sections in document order. The first one is active until the
    /// tracker says otherwise.
    pub sections: Vec<SectionConfig>,
    /// Navbar items.
    pub nav_items: Vec<NavItem<String>>,
    /// Section the brand button scrolls to.
    pub home: String,
    /// Section the hero call to action scrolls to.
    pub call_to_action: String,
    /// Scroll tracking tunables.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tracker: TrackerConfig,
    /// Navigation tunables.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nav: NavConfig,
    /// Projects shown in the showcase, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub projects: Vec<Project>,
    /// Profile links.
    #[cfg_attr(feature = "serde", serde(default))]
    pub social_links: Vec<SocialLink>,
}

impl PageConfig {
    /// The one-page developer portfolio: hero, about, projects, contact.
    #[must_use]
    pub fn portfolio() -> Self {
        Self {
            title: "David - Desarrollador Web Profesional".into(),
            sections: vec![
                SectionConfig::new("hero", SectionKind::Hero),
                SectionConfig::new("about", SectionKind::About),
                SectionConfig::new("projects", SectionKind::Projects),
                SectionConfig::new("contact", SectionKind::Contact),
            ],
            nav_items: vec![
                NavItem::new("about".into(), "Sobre Mí"),
                NavItem::new("projects".into(), "Proyectos"),
            ],
            home: "hero".into(),
            call_to_action: "projects".into(),
            tracker: TrackerConfig::default(),
            nav: NavConfig::default(),
            projects: vec![
                Project {
                    id: 1,
                    title: "Sitio Web Corporativo y de Productos".into(),
                    description: "Sitio web de varias páginas para una empresa importadora de \
                                  insumos gráficos, con diseño moderno, animaciones interactivas \
                                  y un catálogo de productos."
                        .into(),
                    image: "https://c.animaapp.com/mga2mgsxPclnjf/img/image_1.png".into(),
                    alt: "Corporate website project".into(),
                    tags: ["HTML5", "CSS3", "JavaScript", "Diseño Responsivo", "Animaciones"]
                        .map(String::from)
                        .to_vec(),
                    video_url: "https://www.youtube.com/embed/RW0qw7KKLN8".into(),
                },
                Project {
                    id: 2,
                    title: "Aplicación Web de Gestión de Asistencia".into(),
                    description: "Aplicación web para la gestión de asistencia con login por \
                                  roles, gestión de estudiantes y reportes exportables a Excel."
                        .into(),
                    image: "https://c.animaapp.com/mga2mgsxPclnjf/img/image.png".into(),
                    alt: "Attendance management application".into(),
                    tags: ["React", "TypeScript", "Autenticación", "UI/UX"]
                        .map(String::from)
                        .to_vec(),
                    video_url: "https://www.youtube.com/embed/pGXtO2kiR2o".into(),
                },
            ],
            social_links: [
                ("GitHub", "https://github.com"),
                ("LinkedIn", "https://linkedin.com"),
                ("Twitter", "https://twitter.com"),
                ("Email", "mailto:david@example.com"),
            ]
            .map(|(label, href)| SocialLink {
                label: label.into(),
                href: href.into(),
            })
            .to_vec(),
        }
    }

    /// The section with `id`.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }
}
