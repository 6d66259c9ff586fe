// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the list pages: header, loading and failure
//! states, cards and badges.

use crate::application::port::DataError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, rule, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Duration;

/// Page title with an optional subtitle and right-aligned actions.
pub fn header<'a, M: 'a>(
    title: &'a str,
    subtitle: Option<String>,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let mut titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_LG));
    if let Some(subtitle) = subtitle {
        titles = titles.push(muted(subtitle));
    }

    actions
        .into_iter()
        .fold(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .spacing(spacing::SM)
                .push(titles)
                .push(Space::new().width(Length::Fill)),
            |row, action| row.push(action),
        )
        .into()
}

/// Spinner plus a caption, centered in the page body.
pub fn loading<'a, M: 'static>(elapsed: Duration, caption: &'a str) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::for_elapsed(palette::PRIMARY_500, elapsed).into_element())
        .push(muted(caption));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Failure panel: what failed, a retry button and the error text behind a
/// "Show details" toggle.
pub fn load_error<M: Clone + 'static>(
    what: &str,
    error: &DataError,
    details_visible: bool,
    retry: M,
    toggle_details: M,
) -> Element<'static, M> {
    let accent = Severity::Error.color();
    let accented = move |_theme: &Theme| text::Style {
        color: Some(accent),
    };

    let toggle_label = if details_visible {
        "Hide details"
    } else {
        "Show details"
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(Severity::Error.glyph())
                .size(sizing::ICON_LG)
                .style(accented),
        )
        .push(
            Text::new(format!("Could not load {what}"))
                .size(typography::TITLE_MD)
                .style(accented),
        )
        .push(Text::new("Check your connection and try again.").size(typography::BODY))
        .push(
            button(Text::new("Retry").size(typography::BODY))
                .on_press(retry)
                .style(styles::button::selected),
        )
        .push(
            button(Text::new(toggle_label).size(typography::BODY_SM))
                .on_press(toggle_details)
                .style(styles::button::ghost),
        );

    if details_visible {
        body = body.push(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .push(rule::horizontal(1))
                .push(muted(error.to_string())),
        );
    }

    let panel = Container::new(body)
        .max_width(sizing::DIALOG_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// Placeholder shown when filters leave nothing visible.
pub fn empty<'a, M: 'a>(line: &'a str) -> Element<'a, M> {
    Container::new(muted(line))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// List card; `highlighted` marks a search hit.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>, highlighted: bool) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card(highlighted))
        .into()
}

/// Colored pill label.
pub fn badge<'a, M: 'a>(label: impl text::IntoFragment<'a>, color: Color) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

/// Secondary text.
pub fn muted<'a>(line: impl text::IntoFragment<'a>) -> Text<'a> {
    Text::new(line)
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        })
}

/// Label/value line used in detail dialogs.
pub fn detail_row<'a, M: 'a>(label: &'a str, value: impl text::IntoFragment<'a>) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::SM)
        .push(Container::new(muted(label)).width(Length::Fixed(120.0)))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

/// Inline validation message under a form field.
pub fn field_error<'a, M: 'a>(message: Option<&'static str>) -> Option<Element<'a, M>> {
    message.map(|message| {
        Text::new(message)
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(theme::error_text_color()),
            })
            .into()
    })
}
