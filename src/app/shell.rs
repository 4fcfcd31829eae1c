// SPDX-License-Identifier: MPL-2.0
//! Presentation state of the layout shell.
//!
//! Fields are private and change only through the setters below, so the
//! scroll-to-top flag always agrees with the stored offset and the compact
//! menu closes as soon as the window leaves compact layout.

use crate::app::config::DEFAULT_SCROLL_TOP_THRESHOLD;
use crate::ui::design_tokens::sizing;
use crate::ui::sections::CardId;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    menu_open: bool,
    theme_mode: ThemeMode,
    scroll_offset: f32,
    show_scroll_top: bool,
    compact_layout: bool,
    hovered_card: Option<CardId>,
    #[serde(skip, default = "default_threshold")]
    scroll_top_threshold: f32,
}

fn default_threshold() -> f32 {
    DEFAULT_SCROLL_TOP_THRESHOLD
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ThemeMode::default(), DEFAULT_SCROLL_TOP_THRESHOLD)
    }
}

impl UiState {
    #[must_use]
    pub fn new(theme_mode: ThemeMode, scroll_top_threshold: f32) -> Self {
        Self {
            menu_open: false,
            theme_mode,
            scroll_offset: 0.0,
            show_scroll_top: false,
            compact_layout: false,
            hovered_card: None,
            scroll_top_threshold,
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    #[must_use]
    pub fn compact_layout(&self) -> bool {
        self.compact_layout
    }

    #[must_use]
    pub fn hovered_card(&self) -> Option<CardId> {
        self.hovered_card
    }

    #[must_use]
    pub fn scroll_top_threshold(&self) -> f32 {
        self.scroll_top_threshold
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Flips between light and dark. `System` resolves to the opposite of
    /// the OS mode.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(mode = ?self.theme_mode, "theme toggled");
    }

    /// Records the content offset. The button shows strictly above the
    /// threshold.
    pub fn on_scroll(&mut self, offset: f32) {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.scroll_offset = offset;
        self.show_scroll_top = offset > self.scroll_top_threshold;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0.0;
        self.show_scroll_top = false;
    }

    /// Updates the compact flag from the window width. Leaving compact
    /// layout closes the dropdown.
    pub fn set_window_width(&mut self, width: f32) {
        let compact = is_compact_width(width);
        if self.compact_layout && !compact {
            self.menu_open = false;
        }
        self.compact_layout = compact;
    }

    pub fn set_hovered(&mut self, card: CardId) {
        self.hovered_card = Some(card);
    }

    /// Clears the hover only if `card` is the one currently highlighted, so
    /// an exit event arriving after the next enter does not erase it.
    pub fn clear_hovered(&mut self, card: CardId) {
        if self.hovered_card == Some(card) {
            self.hovered_card = None;
        }
    }

    /// Drops hover state, e.g. when the mounted section changes.
    pub fn reset_hover(&mut self) {
        self.hovered_card = None;
    }
}

#[must_use]
pub fn is_compact_width(width: f32) -> bool {
    width < sizing::COMPACT_BREAKPOINT
}

#[must_use]
pub fn is_wide_width(width: f32) -> bool {
    width >= sizing::WIDE_BREAKPOINT
}
