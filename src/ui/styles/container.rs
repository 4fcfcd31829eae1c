// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Fixed header bar with its translucent backdrop.
pub fn header(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.header_background)),
        border: Border {
            color: scheme.track,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Dropdown panel of the compact header.
pub fn dropdown(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        shadow: shadow::MD,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Content card; hovering lifts it with a stronger shadow and surface.
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(if hovered {
                scheme.surface_card_hover
            } else {
                scheme.surface_card
            })),
            border: Border {
                color: if hovered {
                    scheme.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if hovered { shadow::LG } else { shadow::SM },
            text_color: Some(scheme.text_primary),
            ..Default::default()
        }
    }
}

/// Rounded tag used for technologies and certificate skills.
pub fn chip(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.chip_background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(scheme.brand_primary),
        ..Default::default()
    }
}

/// Empty part of a skill bar.
pub fn skill_track(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.track)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a skill bar.
pub fn skill_fill(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.brand_primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Opaque veil drawn over a section while it fades.
///
/// `coverage` is 1.0 when the section is fully hidden.
pub fn veil(coverage: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: coverage.clamp(0.0, 1.0),
                ..scheme.surface_primary
            })),
            ..Default::default()
        }
    }
}
