// SPDX-License-Identifier: MPL-2.0
//! Rendering of modal dialogs on top of the page.
//!
//! The backdrop is an opaque layer: it swallows pointer and scroll events
//! so nothing behind it reacts while a modal is up. A press that lands on
//! it (rather than on the dialog) emits the close message, if one is given.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Space, Stack};
use iced::{alignment, Element, Length};

/// Wraps dialog content in a titled card with a close button.
pub fn dialog<'a, M: Clone + 'a>(
    title: impl text::IntoFragment<'a>,
    body: impl Into<Element<'a, M>>,
    on_close: M,
    alpha: f32,
) -> Element<'a, M> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("×").size(typography::TITLE_SM))
                .on_press(on_close)
                .padding(spacing::XXS)
                .style(styles::button::ghost),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body.into()),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog(alpha))
    .into()
}

/// Layers `dialog` over `base`.
///
/// Backdrop presses emit `on_backdrop`; with `None` they are swallowed.
pub fn overlay<'a, M: Clone + 'a>(
    base: impl Into<Element<'a, M>>,
    dialog: impl Into<Element<'a, M>>,
    on_backdrop: Option<M>,
    alpha: f32,
) -> Element<'a, M> {
    // The inner `opaque` keeps presses on the dialog from reaching the
    // backdrop's mouse area.
    let mut backdrop = mouse_area(
        center(opaque(dialog))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(alpha)),
    );
    if let Some(message) = on_backdrop {
        backdrop = backdrop.on_press(message);
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(opaque(backdrop))
        .into()
}
