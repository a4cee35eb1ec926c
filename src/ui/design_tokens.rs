// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the flashcard UI.
//!
//! The palette mirrors the mock app's dark indigo look: a deep indigo
//! background, slightly lighter indigo surfaces, indigo borders, a sky
//! blue accent for study-mode icons, and an amber trial banner.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Indigo scale (app background and surfaces), from #18183A / #23234A / #35356B
    pub const INDIGO_900: Color = Color::from_rgb(0.094, 0.094, 0.227);
    pub const INDIGO_800: Color = Color::from_rgb(0.137, 0.137, 0.290);
    pub const INDIGO_600: Color = Color::from_rgb(0.208, 0.208, 0.420);

    // Sky blue accent used by study-mode icons, from #4FC3F7
    pub const SKY_400: Color = Color::from_rgb(0.310, 0.765, 0.969);

    // Amber trial banner, from #FACC15
    pub const AMBER_400: Color = Color::from_rgb(0.980, 0.800, 0.082);

    // Grayscale text on dark surfaces
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);

    // Semantic colors for the quiz tallies
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 28.0;

    // Flip cards in the detail carousel
    pub const CAROUSEL_CARD_WIDTH: f32 = 250.0;
    pub const CAROUSEL_CARD_HEIGHT: f32 = 160.0;

    // The quiz card fills most of the overlay
    pub const QUIZ_CARD_HEIGHT: f32 = 320.0;

    // Home screen set tiles
    pub const SET_TILE_WIDTH: f32 = 250.0;

    // Dot indicator under the carousel
    pub const DOT_SIZE: f32 = 8.0;

    // Bottom navigation bar
    pub const FOOTER_HEIGHT: f32 = 64.0;

    pub const AVATAR_SM: f32 = 28.0;
    pub const AVATAR_MD: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Set title on the detail screen
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headers, quiz card faces
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Card faces in the carousel
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Term-count badges, footer labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
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

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
