// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the sidebar and filter bars.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// List card (player, drill, session). Highlighted cards get an accent border.
pub fn card(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if highlighted {
            palette.primary.base.color
        } else {
            palette.background.strong.color
        };

        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: border_color,
                width: if highlighted {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Dialog surface. Fades with `alpha` while the modal closes.
pub fn dialog(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let mut lifted = shadow::LG;
        lifted.color.a *= alpha;

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette.background.base.color
            })),
            text_color: Some(Color {
                a: alpha,
                ..palette.background.base.text
            }),
            border: Border {
                color: Color {
                    a: alpha,
                    ..palette.background.strong.color
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: lifted,
            ..Default::default()
        }
    }
}

/// Small pill label (status, tags) tinted with `color`.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
