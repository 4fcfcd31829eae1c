// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: every
//! component renders from borrowed state and reports user intent through its
//! own message type.
//!
//! # Views
//!
//! - [`navbar`] - Header with section navigation, theme toggle and compact menu
//! - [`sections`] - The five content sections
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Presence sequencing and transition frames
//! - [`widgets`] - Small reusable widgets (skill bar)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod animation;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
