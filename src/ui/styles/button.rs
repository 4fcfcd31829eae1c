// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid brand button, used for outbound links such as "View on GitHub".
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let (background, elevation) = match status {
        button::Status::Hovered => (scheme.brand_secondary, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.brand_primary
            },
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => (scheme.brand_primary, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: elevation,
        snap: true,
    }
}

/// Header navigation entry. The active section is drawn in the brand color.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);

        let text_color = match (active, status) {
            (true, _) => scheme.brand_primary,
            (false, button::Status::Hovered | button::Status::Pressed) => scheme.brand_secondary,
            (false, _) => scheme.text_secondary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Full-width entry of the compact dropdown menu.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        button::Style {
            background: (active || hovered).then_some(Background::Color(scheme.surface_card)),
            text_color: if active {
                scheme.brand_primary
            } else {
                scheme.text_secondary
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button (theme toggle, menu button).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(scheme.surface_card_hover))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round floating scroll-to-top button.
pub fn floating(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_HOVER,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..scheme.brand_primary
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Inline text link (contact profiles).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => scheme.brand_secondary,
            button::Status::Active | button::Status::Disabled => scheme.brand_primary,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, ColorScheme::dark().brand_primary);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn active_nav_item_stays_highlighted_on_hover() {
        let theme = Theme::Light;
        let style_fn = nav_item(true);

        let idle = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);
        assert_eq!(idle.text_color, ColorScheme::light().brand_primary);
        assert_eq!(idle.text_color, hovered.text_color);
    }

    #[test]
    fn inactive_nav_item_reacts_to_hover() {
        let theme = Theme::Dark;
        let style_fn = nav_item(false);

        let idle = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);
        assert_ne!(idle.text_color, hovered.text_color);
    }

    #[test]
    fn floating_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let normal = floating(&theme, button::Status::Active);
        let hover = floating(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }
}
