// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at compile time. The
//! locale is chosen once at startup from the CLI, the config file, or the
//! system settings, and falls back to `en-US`.

pub mod fluent;
