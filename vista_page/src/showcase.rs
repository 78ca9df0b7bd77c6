// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// A portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    /// Stable id, unique within a page.
    pub id: u32,
    /// Card and dialog heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Cover image URL.
    pub image: String,
    /// Cover image alt text.
    pub alt: String,
    /// Technology badges.
    pub tags: Vec<String>,
    /// Embeddable demo video URL, shown in the dialog.
    pub video_url: String,
}

/// Projects plus the detail dialog, which is either closed or showing
/// exactly one project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Showcase {
    projects: Vec<Project>,
    selected: Option<u32>,
}

impl Showcase {
    /// A showcase over `projects`, dialog closed.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected: None,
        }
    }

    /// Projects in display order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Opens the dialog on project `id`. An unknown id closes it instead.
    ///
    /// Returns whether the dialog is open afterwards.
    pub fn open(&mut self, id: u32) -> bool {
        self.selected = self.projects.iter().any(|p| p.id == id).then_some(id);
        tracing::trace!(project = id, open = self.selected.is_some(), "showcase dialog");
        self.selected.is_some()
    }

    /// Closes the dialog.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Whether the dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The project shown in the dialog.
    #[must_use]
    pub fn current(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|p| p.id == id)
    }
}
