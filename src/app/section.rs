// SPDX-License-Identifier: MPL-2.0
//! Section enumeration and the static navigation list.

use serde::{Deserialize, Serialize};

/// Content sections the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Skills,
    Projects,
    Certificates,
    Contact,
}

/// A header entry: stable id plus the i18n key of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label_key: &'static str,
    pub section: Section,
}

/// Header entries in display order.
pub const NAVIGATION_ITEMS: [NavigationItem; 5] = [
    NavigationItem {
        id: "home",
        label_key: "nav-home",
        section: Section::Home,
    },
    NavigationItem {
        id: "skills",
        label_key: "nav-skills",
        section: Section::Skills,
    },
    NavigationItem {
        id: "projects",
        label_key: "nav-projects",
        section: Section::Projects,
    },
    NavigationItem {
        id: "certificates",
        label_key: "nav-certificates",
        section: Section::Certificates,
    },
    NavigationItem {
        id: "contact",
        label_key: "nav-contact",
        section: Section::Contact,
    },
];

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    /// Looks up a section by navigation id. Returns `None` for ids that are
    /// not part of [`NAVIGATION_ITEMS`].
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        NAVIGATION_ITEMS
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.section)
    }

    #[must_use]
    pub fn navigation_item(self) -> &'static NavigationItem {
        // NAVIGATION_ITEMS is ordered like ALL
        &NAVIGATION_ITEMS[self.index()]
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.navigation_item().id
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        self.navigation_item().label_key
    }

    /// Position in the header, starting at zero.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Skills => 1,
            Section::Projects => 2,
            Section::Certificates => 3,
            Section::Contact => 4,
        }
    }

    /// Section bound to the given 1-based shortcut digit.
    #[must_use]
    pub fn from_shortcut(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn navigation_ids_are_unique() {
        let ids: HashSet<_> = NAVIGATION_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), NAVIGATION_ITEMS.len());
    }

    #[test]
    fn navigation_items_follow_section_order() {
        for (index, section) in Section::ALL.iter().enumerate() {
            assert_eq!(NAVIGATION_ITEMS[index].section, *section);
            assert_eq!(section.index(), index);
        }
    }

    #[test]
    fn from_id_resolves_every_configured_id() {
        for item in NAVIGATION_ITEMS {
            assert_eq!(Section::from_id(item.id), Some(item.section));
            assert_eq!(item.section.id(), item.id);
        }
    }

    #[test]
    fn from_id_rejects_unknown_ids() {
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Home"), None);
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn shortcuts_map_digits_to_sections() {
        assert_eq!(Section::from_shortcut('1'), Some(Section::Home));
        assert_eq!(Section::from_shortcut('5'), Some(Section::Contact));
        assert_eq!(Section::from_shortcut('0'), None);
        assert_eq!(Section::from_shortcut('6'), None);
        assert_eq!(Section::from_shortcut('x'), None);
    }
}
