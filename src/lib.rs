// SPDX-License-Identifier: MPL-2.0
//! `cyber_portfolio` is a single-page security portfolio built with the Iced
//! GUI framework.
//!
//! A persistent header switches between five static content sections with
//! exit-then-enter transitions. The shell adds a light/dark toggle, a
//! compact-layout menu and a scroll-to-top button, with Fluent translations
//! and an optional `settings.toml`.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod links;
pub mod ui;
