// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed here. While a modal is open, Tab and
//! Shift+Tab are taken over by the focus trap and Escape closes the dialog;
//! otherwise they keep their default widget behavior.

use super::Message;
use iced::keyboard::{self, key, Key, Modifiers};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Keyboard subscription; `modal_open` selects the routing table.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if modal_open {
        event::listen_with(|event, _status, _window| modal_shortcut(&event))
    } else {
        event::listen_with(|event, _status, _window| {
            let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event else {
                return None;
            };
            global_shortcut(key, *modifiers)
        })
    }
}

fn modal_shortcut(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    match key {
        Key::Named(key::Named::Escape) => Some(Message::CloseActiveModal),
        Key::Named(key::Named::Tab) if modifiers.shift() => Some(Message::FocusPrevious),
        Key::Named(key::Named::Tab) => Some(Message::FocusNext),
        _ => global_shortcut(key, *modifiers),
    }
}

/// Ctrl (Cmd on macOS) shortcuts, available on every page.
fn global_shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.command() {
        return None;
    }
    match key.as_ref() {
        Key::Character("k") => Some(Message::FocusSearch),
        Key::Character("/") => Some(Message::ShowShortcuts),
        Key::Character("n") => Some(Message::NewDrillShortcut),
        _ => None,
    }
}

/// Periodic tick while anything time-driven is on screen.
pub fn create_tick_subscription(
    has_notifications: bool,
    modals_animating: bool,
    is_loading: bool,
) -> Subscription<Message> {
    if has_notifications || modals_animating || is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
