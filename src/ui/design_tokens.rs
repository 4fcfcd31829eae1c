// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes and layout breakpoints
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use cyber_portfolio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent card surface
let card_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_800
};

// Use the spacing scale
let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.05, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.92, 1.0); // Very light blue
    pub const PRIMARY_300: Color = Color::from_rgb(0.58, 0.77, 0.99); // Light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.65, 0.98); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92); // Medium dark blue
    pub const PRIMARY_900: Color = Color::from_rgb(0.12, 0.23, 0.54); // Very dark blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
    pub const XXL: f32 = 48.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 32.0;

    /// Fixed header bar height.
    pub const HEADER_HEIGHT: f32 = 64.0;

    /// Skill bar track thickness.
    pub const SKILL_TRACK: f32 = 8.0;

    /// Content column width on wide windows.
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;

    /// Window width below which the header collapses into a menu button.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    /// Window width at which projects use three columns.
    pub const WIDE_BREAKPOINT: f32 = 1024.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the owner name on the landing section
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: chips and dates

    pub const DISPLAY: f32 = 48.0;

    /// Section headings (Skills & Expertise, Projects, ...)
    pub const TITLE_LG: f32 = 30.0;

    /// Card headings, header brand
    pub const TITLE_MD: f32 = 24.0;

    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 16.0;

    pub const BODY_SM: f32 = 14.0;

    /// Caption - Chips, badges, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, card outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::WIDE_BREAKPOINT > sizing::COMPACT_BREAKPOINT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
