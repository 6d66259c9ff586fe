// SPDX-License-Identifier: MPL-2.0
//! Sidebar with page navigation, the collapse toggle and the theme toggle.
//!
//! The sidebar owns no state of its own: the collapsed flag and the theme
//! mode live in the application, which persists them when the sidebar
//! reports a change through [`Event`].

use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext {
    pub screen: Screen,
    pub collapsed: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleCollapse,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Screen),
    /// The collapsed flag changed to the carried value.
    CollapseChanged(bool),
    ThemeToggled,
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, collapsed: &mut bool) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleCollapse => {
            *collapsed = !*collapsed;
            Event::CollapseChanged(*collapsed)
        }
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the sidebar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let width = if ctx.collapsed {
        sizing::SIDEBAR_COLLAPSED_WIDTH
    } else {
        sizing::SIDEBAR_WIDTH
    };

    let toggle_label = if ctx.collapsed { "»" } else { "« Collapse" };
    let collapse_button = button(Text::new(toggle_label).size(typography::BODY))
        .on_press(Message::ToggleCollapse)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .height(Length::Fill)
        .push(collapse_button);

    if !ctx.collapsed {
        content = content.push(
            Text::new("SquadDesk")
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        );
    }

    for screen in Screen::ALL {
        content = content.push(build_nav_item(screen, ctx.screen == screen, ctx.collapsed));
    }

    content = content
        .push(Space::new().height(Length::Fill))
        .push(build_theme_toggle(ctx.theme_mode, ctx.collapsed));

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn build_nav_item<'a>(screen: Screen, active: bool, collapsed: bool) -> Element<'a, Message> {
    let label = if collapsed { screen.mark() } else { screen.label() };
    let text = Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(if collapsed {
            Horizontal::Center
        } else {
            Horizontal::Left
        })
        .align_y(Vertical::Center);

    let item = button(text)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::XS]);

    if active {
        item.style(styles::button::selected).into()
    } else {
        item.on_press(Message::Navigate(screen))
            .style(styles::button::ghost)
            .into()
    }
}

fn build_theme_toggle<'a>(mode: ThemeMode, collapsed: bool) -> Element<'a, Message> {
    let label = match (collapsed, mode.is_dark()) {
        (true, _) => "◐",
        (false, true) => "Light mode",
        (false, false) => "Dark mode",
    };

    button(Text::new(label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::unselected)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_collapse_flips_flag_and_reports_it() {
        let mut collapsed = false;
        assert_eq!(
            update(Message::ToggleCollapse, &mut collapsed),
            Event::CollapseChanged(true)
        );
        assert!(collapsed);
        assert_eq!(
            update(Message::ToggleCollapse, &mut collapsed),
            Event::CollapseChanged(false)
        );
        assert!(!collapsed);
    }

    #[test]
    fn navigation_leaves_collapse_alone() {
        let mut collapsed = true;
        assert_eq!(
            update(Message::Navigate(Screen::Schedule), &mut collapsed),
            Event::Navigate(Screen::Schedule)
        );
        assert!(collapsed);
    }

    #[test]
    fn theme_toggle_is_forwarded() {
        let mut collapsed = false;
        assert_eq!(update(Message::ToggleTheme, &mut collapsed), Event::ThemeToggled);
    }
}
