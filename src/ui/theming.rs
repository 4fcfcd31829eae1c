// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,
    pub surface_card_hover: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Chips and tracks
    pub chip_background: Color,
    pub track: Color,

    pub header_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_card: palette::GRAY_100,
            surface_card_hover: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_500,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_500,

            chip_background: palette::PRIMARY_100,
            track: palette::GRAY_200,

            header_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,
            surface_card: Color {
                a: opacity::OVERLAY_SUBTLE + 0.1,
                ..palette::GRAY_800
            },
            surface_card_hover: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_800
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_300,

            chip_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_900
            },
            track: palette::GRAY_700,

            header_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an Iced theme built by [`iced_theme`].
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        Self::for_dark(!matches!(theme, Theme::Light))
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The explicit mode currently in effect. `System` is resolved once
    /// against the OS setting.
    #[must_use]
    pub fn resolved(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The explicit mode opposite to the currently effective one.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Built-in Iced theme matching the effective mode. Widget-level colors come
/// from [`ColorScheme`].
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> Theme {
    if mode.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
