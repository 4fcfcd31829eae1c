// SPDX-License-Identifier: MPL-2.0
//! Section router holding the active section.
//!
//! The router is a flat transition table: any section can be reached from any
//! other one in a single step. It knows nothing about animations; the shell
//! reacts to the returned change and drives presentation separately.

use super::section::Section;

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The active section changed from `from` to `to`.
    Switched { from: Section, to: Section },
    /// The requested section was already active.
    Unchanged,
    /// The id is not a configured navigation id.
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    active: Section,
}

impl Router {
    #[must_use]
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Switches to the section with the given navigation id.
    ///
    /// Unknown ids leave the active section untouched.
    pub fn set_active_section(&mut self, id: &str) -> Change {
        match Section::from_id(id) {
            Some(section) => self.select(section),
            None => {
                tracing::debug!(id, "ignoring unknown section id");
                Change::Rejected
            }
        }
    }

    pub fn select(&mut self, section: Section) -> Change {
        if self.active == section {
            return Change::Unchanged;
        }
        let from = self.active;
        self.active = section;
        tracing::debug!(from = from.id(), to = section.id(), "section switched");
        Change::Switched { from, to: section }
    }
}
