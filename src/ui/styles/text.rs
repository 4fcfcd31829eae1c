// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Dates, captions, footer.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

/// Headings and the header brand.
pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}
