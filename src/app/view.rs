// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen, or the quiz overlay when one is open.

use super::{DetailScreen, Message, Screen};
use crate::decks::SetSummary;
use crate::ui::home;
use crate::ui::quiz;
use crate::ui::set_detail;
use crate::ui::theming::ColorScheme;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub screen: Screen,
    pub home: &'a home::State,
    pub detail: Option<&'a DetailScreen>,
    pub quiz: Option<&'a quiz::State>,
    pub summaries: &'a [SetSummary],
}

/// Renders the quiz overlay if open, otherwise the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if let Some(state) = ctx.quiz {
        return quiz::view(quiz::ViewContext {
            scheme: ctx.scheme,
            state,
        })
        .map(Message::Quiz);
    }

    match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            scheme: ctx.scheme,
            state: ctx.home,
            summaries: ctx.summaries,
        })
        .map(Message::Home),
        Screen::SetDetail => view_detail(ctx.detail, ctx.scheme),
    }
}

fn view_detail<'a>(
    detail: Option<&'a DetailScreen>,
    scheme: &'a ColorScheme,
) -> Element<'a, Message> {
    if let Some(detail) = detail {
        set_detail::view(set_detail::ViewContext {
            scheme,
            state: &detail.state,
            set: &detail.set,
        })
        .map(Message::SetDetail)
    } else {
        // Fallback if detail state is missing
        Container::new(Text::new("Set unavailable"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
