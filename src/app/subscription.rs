// SPDX-License-Identifier: MPL-2.0
//! Keyboard subscriptions for the application.
//!
//! Hotkeys depend on what is open: the quiz claims the arrow keys, space,
//! and escape; the detail screen only answers to escape. The home screen
//! has no hotkeys (the search field owns the keyboard there).

use super::Message;
use crate::ui::quiz;
use crate::ui::set_detail;
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};
use iced::Subscription;

/// Hotkeys while the quiz overlay is open.
fn quiz_hotkeys(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::Quiz(quiz::Message::PrevPressed)),
        Key::Named(Named::ArrowRight) => Some(Message::Quiz(quiz::Message::NextPressed)),
        Key::Named(Named::Space) | Key::Named(Named::Enter) => {
            Some(Message::Quiz(quiz::Message::FlipPressed))
        }
        Key::Named(Named::Escape) => Some(Message::Quiz(quiz::Message::ClosePressed)),
        _ => None,
    }
}

/// Hotkeys on the set detail screen.
fn detail_hotkeys(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::SetDetail(set_detail::Message::BackPressed)),
        _ => None,
    }
}

/// Creates the keyboard subscription for the current application state.
pub fn create_keyboard_subscription(
    quiz_open: bool,
    on_detail_screen: bool,
) -> Subscription<Message> {
    if quiz_open {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => quiz_hotkeys(key, modifiers),
            _ => None,
        })
    } else if on_detail_screen {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => detail_hotkeys(key, modifiers),
            _ => None,
        })
    } else {
        Subscription::none()
    }
}
