// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every page and widget.
//!
//! Styles and views pull colors, spacing and sizes from here instead of
//! hard-coding values, so a palette tweak lands everywhere at once.
//!
//! ```
//! use iced::Color;
//! use squad_desk::ui::design_tokens::{opacity, palette, spacing};
//!
//! let scrim = Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = scrim;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Team blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast and status accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Modal scrim at full entry progress.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Cards, sidebar and toasts.
    pub const SURFACE: f32 = 0.95;
}

/// 4px steps on an 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_LG: f32 = 32.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const SIDEBAR_WIDTH: f32 = 240.0;
    pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 480.0;
    pub const SEARCH_WIDTH: f32 = 280.0;
    pub const FILTER_WIDTH: f32 = 160.0;
}

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 30.0;
    /// App name in the sidebar, dialog titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Card titles and section headers.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges and counters.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent stripe, focused field.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Chips and badges.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 4.0);
    pub const MD: Shadow = drop(4.0, 8.0);
    pub const LG: Shadow = drop(8.0, 16.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);

    assert!(sizing::SIDEBAR_COLLAPSED_WIDTH < sizing::SIDEBAR_WIDTH);
    assert!(sizing::FILTER_WIDTH < sizing::SEARCH_WIDTH);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::BODY_LG < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);
};
