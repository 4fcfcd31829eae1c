// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Every record here is defined at compile time and never mutated. The UI
//! layer maps these arrays into cards, rows and bars; no other computation
//! happens on them.

mod data;

pub use data::{
    CERTIFICATES, CONTACT_INFO, HOME, PROFILES, PROJECTS, TECHNICAL_SKILLS, TOOLS_AND_PLATFORMS,
};

/// A skill or tool with a self-assessed proficiency in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A project card entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    /// Category badge, e.g. "Security Tool".
    pub kind: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub repository_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

/// A plain label/value row in the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// An outbound profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub label: &'static str,
    pub url: &'static str,
    /// Icon path relative to the assets directory.
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub focus_areas: &'static [&'static str],
}

/// Landing section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeProfile {
    pub owner: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub education: Education,
}
