// SPDX-License-Identifier: MPL-2.0
//! Flip-card face rendering shared by the carousel and the quiz.
//!
//! Renders whichever face the caller's reveal state selects; tap handling
//! stays at the call site so the same widget serves both the per-card
//! flips of the carousel and the quiz session.

use crate::decks::Card;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{text, Container};
use iced::{Element, Length};

/// Dimensions and type scale for one card face.
#[derive(Debug, Clone, Copy)]
pub struct FaceSize {
    pub width: Length,
    pub height: f32,
    pub text_size: f32,
}

/// Renders the visible face of `card`.
pub fn view<'a, M: 'a>(
    card: &'a Card,
    revealed: bool,
    scheme: &ColorScheme,
    size: FaceSize,
) -> Element<'a, M> {
    let face = if revealed { &card.back } else { &card.front };

    let label = text(face.as_str())
        .size(size.text_size)
        .color(scheme.text_primary);

    Container::new(label)
        .width(size.width)
        .height(Length::Fixed(size.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .style(styles::card_face(scheme))
        .into()
}

/// Convenience wrapper that centers arbitrary content in a card face.
pub fn frame<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    scheme: &ColorScheme,
    size: FaceSize,
) -> Element<'a, M> {
    Container::new(content)
        .width(size.width)
        .height(Length::Fixed(size.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .style(styles::card_face(scheme))
        .into()
}
