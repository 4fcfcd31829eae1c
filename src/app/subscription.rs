// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and window events are always listened to. Frame ticks run only
//! while a section transition is in progress, and the slower notification
//! tick only while toasts are on screen.

use super::config::{FRAME_INTERVAL, NOTIFICATION_TICK};
use super::message::{Message, Shortcut};
use super::section::Section;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, window, Size, Subscription};

/// Routes keyboard shortcuts and window sizes.
///
/// Keys already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window_event) => window_size(&window_event).map(Message::WindowSized),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => shortcut_for(&key, modifiers).map(Message::Shortcut),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Inner size carried by `event`.
///
/// The size from `Opened` replaces the default width assumed at boot, since
/// the window manager may not follow the requested size.
fn window_size(event: &window::Event) -> Option<Size> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => Some(*size),
        _ => None,
    }
}

/// Frame ticks driving the presence transitions.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a key press to an application shortcut.
///
/// Digits `1`–`5` select sections, `Home` scrolls to the top and `Escape`
/// closes the compact menu. Chords with Ctrl, Alt or Logo are ignored.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.control() || modifiers.command() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Home) => Some(Shortcut::ScrollToTop),
        Key::Named(Named::Escape) => Some(Shortcut::CloseMenu),
        Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) => Section::from_shortcut(digit).map(Shortcut::Select),
                _ => None,
            }
        }
        _ => None,
    }
}
