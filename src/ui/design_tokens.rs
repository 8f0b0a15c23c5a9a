// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the showcase's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use hotel_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a caption backdrop color
let caption_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

// Use the spacing scale
let padding = spacing::MD; // 16px
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const IVORY: Color = Color::from_rgb(0.98, 0.96, 0.92);

    // Brand colors (navy scale)
    pub const NAVY_400: Color = Color::from_rgb(0.33, 0.42, 0.62);
    pub const NAVY_500: Color = Color::from_rgb(0.2, 0.29, 0.5);
    pub const NAVY_600: Color = Color::from_rgb(0.14, 0.22, 0.4);
    pub const NAVY_900: Color = Color::from_rgb(0.05, 0.08, 0.16);

    // Accent (gold scale)
    pub const GOLD_300: Color = Color::from_rgb(0.93, 0.82, 0.55);
    pub const GOLD_500: Color = Color::from_rgb(0.8, 0.64, 0.3);
    pub const GOLD_600: Color = Color::from_rgb(0.68, 0.52, 0.22);

    // Placeholder tiles shown when an image file is missing
    pub const PLACEHOLDER_WARM: Color = Color::from_rgb(0.55, 0.42, 0.33);
    pub const PLACEHOLDER_COOL: Color = Color::from_rgb(0.3, 0.44, 0.5);
    pub const PLACEHOLDER_GREEN: Color = Color::from_rgb(0.33, 0.46, 0.36);
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

    /// Surface background - Semi-transparent cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Rotating regions
    pub const BANNER_HEIGHT: f32 = 320.0;
    pub const HERO_HEIGHT: f32 = 220.0;
    pub const GALLERY_HEIGHT: f32 = 180.0;

    // Cards
    pub const ROOM_CARD_WIDTH: f32 = 300.0;
    pub const INFO_CARD_WIDTH: f32 = 220.0;

    // Navigation affordances
    pub const ARROW_BUTTON: f32 = 36.0;
    pub const DOT: f32 = 10.0;
    pub const DOT_ACTIVE: f32 = 14.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Banner headline
    pub const DISPLAY: f32 = 36.0;

    /// Large title - Hotel name in the header
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Review quotes
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Image captions, review authors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    // Sizing validation
    assert!(sizing::BANNER_HEIGHT > sizing::HERO_HEIGHT);
    assert!(sizing::DOT_ACTIVE > sizing::DOT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
