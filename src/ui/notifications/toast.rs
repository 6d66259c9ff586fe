// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent. Clicking anywhere
//! on a toast dismisses it. Opacity and horizontal offset follow the
//! notification phase so entry and exit read as a slide-and-fade.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Horizontal distance a toast slides while entering or leaving.
const SLIDE_DISTANCE: f32 = 48.0;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given opacity.
    pub fn view<'a>(notification: &'a Notification, alpha: f32) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent_color, alpha)),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        let dismiss_hint = Text::new("×")
            .size(typography::BODY_LG)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha * 0.6)),
            });

        // Layout: [glyph] [message] [×]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_hint);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

        let offset = (1.0 - alpha) * SLIDE_DISTANCE;
        let slid = Container::new(card).padding(Padding {
            left: offset,
            ..Padding::ZERO
        });

        mouse_area(slid)
            .on_press(Message::Dismiss(notification.id()))
            .into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Positions toasts in the top-right corner, oldest on top. Returns an
    /// empty, zero-size container when there is nothing to show.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, manager.opacity(notification)))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let mut card_shadow = shadow::MD;
    card_shadow.color = fade(card_shadow.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: fade(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: card_shadow,
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_style_is_transparent() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, 0.0);
        assert!(style.border.color.a.abs() < f32::EPSILON);
    }
}
