// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::section::Section;
use crate::error::Result;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Notification(notifications::NotificationMessage),
    /// Vertical offset of the content scrollable, in logical pixels.
    Scrolled(f32),
    ScrollToTop,
    /// Animation frame while a transition is running.
    Frame(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    Shortcut(Shortcut),
    /// Inner window size, sent when the window opens and on every resize.
    WindowSized(Size),
    /// Result of handing a URL to the system browser.
    LinkOpened {
        url: &'static str,
        result: Result<()>,
    },
}

/// Keyboard shortcuts handled at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Select(Section),
    ScrollToTop,
    CloseMenu,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Navigation id of the section shown at startup. Unknown ids fall back
    /// to home.
    pub section: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PORTFOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional assets directory override (for profile icons).
    /// Takes precedence over `PORTFOLIO_ASSETS_DIR` environment variable.
    pub assets_dir: Option<String>,
    /// Disables section transitions regardless of the config file.
    pub no_animations: bool,
}
