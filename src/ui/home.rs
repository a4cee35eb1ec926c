// SPDX-License-Identifier: MPL-2.0
//! Home screen: search field, horizontally scrolling set tiles, and the
//! bottom navigation bar.
//!
//! The footer's create and library buttons are static chrome, as in the
//! mock app; only the set tiles navigate.

use crate::decks::SetSummary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Space};
use iced::{Element, Length};

/// Home screen state: just the search query.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles whose titles match the current query, in library order.
    pub fn filter<'a>(&self, summaries: &'a [SetSummary]) -> Vec<&'a SetSummary> {
        let needle = self.query.trim().to_lowercase();
        summaries
            .iter()
            .filter(|summary| needle.is_empty() || summary.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SetPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenSet(String),
}

/// Process a home screen message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::SetPressed(id) => Event::OpenSet(id),
    }
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub state: &'a State,
    pub summaries: &'a [SetSummary],
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);
    let lists = build_lists(&ctx);
    let footer = build_footer(&ctx);

    let content = Column::new()
        .push(header)
        .push(lists)
        .push(Space::new().height(Length::Fill))
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::screen(ctx.scheme))
        .into()
}

/// Search field and profile button.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input("Pesquisar", ctx.state.query())
        .on_input(Message::SearchChanged)
        .padding([spacing::XS, spacing::MD])
        .style(styles::search_input(ctx.scheme));

    let profile = icons::sized(icons::profile(), sizing::AVATAR_MD);

    Row::new()
        .push(search)
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(profile)
        .align_y(Vertical::Center)
        .padding([spacing::LG, spacing::MD])
        .width(Length::Fill)
        .into()
}

/// Section header plus the horizontally scrolling tile row.
fn build_lists<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = text("Listas")
        .size(typography::TITLE_MD)
        .color(ctx.scheme.text_primary);

    let mut tiles = Row::new().spacing(spacing::MD);
    for summary in ctx.state.filter(ctx.summaries) {
        tiles = tiles.push(build_tile(ctx.scheme, summary));
    }

    let carousel = scrollable(tiles.padding([spacing::XXS, 0.0]))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .width(Length::Fill);

    Column::new()
        .push(heading)
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(carousel)
        .padding([0.0, spacing::MD])
        .into()
}

/// One flashcard-set tile: title, term-count badge, owner.
fn build_tile<'a>(scheme: &ColorScheme, summary: &'a SetSummary) -> Element<'a, Message> {
    let title = text(summary.title.as_str())
        .size(typography::BODY_LG)
        .color(scheme.text_primary);

    let badge = Container::new(
        text(format!("{} termos", summary.term_count))
            .size(typography::CAPTION)
            .color(scheme.text_secondary),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::pill_badge(scheme));

    let top_row = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(badge)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    let owner_row = Row::new()
        .push(icons::sized(icons::profile(), sizing::AVATAR_SM))
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(
            text(summary.owner.as_str())
                .size(typography::BODY)
                .color(scheme.text_secondary),
        )
        .align_y(Vertical::Center);

    let body = Column::new()
        .push(top_row)
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(owner_row)
        .width(Length::Fixed(sizing::SET_TILE_WIDTH));

    let card = Container::new(body)
        .padding(spacing::MD)
        .style(styles::surface_card(scheme));

    button(card)
        .on_press(Message::SetPressed(summary.id.clone()))
        .padding(0)
        .style(styles::tile(scheme))
        .into()
}

/// Bottom navigation bar. Static chrome apart from the implicit "you are
/// here" home tab.
fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab = |icon, label: &'a str| -> Column<'a, Message> {
        Column::new()
            .push(icon)
            .push(
                text(label)
                    .size(typography::CAPTION)
                    .color(ctx.scheme.text_primary),
            )
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
    };

    let bar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(tab(
            icons::sized(icons::home(), sizing::ICON_LG),
            "Página inicial",
        ))
        .push(Space::new().width(Length::Fill))
        .push(icons::sized(icons::plus_circle(), sizing::ICON_LG))
        .push(Space::new().width(Length::Fill))
        .push(tab(
            icons::sized(icons::library(), sizing::ICON_LG),
            "Sua biblioteca",
        ))
        .push(Space::new().width(Length::Fill))
        .align_y(Vertical::Center);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FOOTER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::footer_bar(ctx.scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<SetSummary> {
        vec![
            SetSummary {
                id: "igbo-language".into(),
                title: "Igbo Language".into(),
                owner: "ekenayy3".into(),
                term_count: 30,
            },
            SetSummary {
                id: "verbs".into(),
                title: "Verbs".into(),
                owner: "yuser".into(),
                term_count: 11,
            },
        ]
    }

    #[test]
    fn empty_query_shows_every_set() {
        let state = State::new();
        assert_eq!(state.filter(&summaries()).len(), 2);
    }

    #[test]
    fn query_filters_by_title_case_insensitively() {
        let mut state = State::new();
        let event = update(Message::SearchChanged("igbo".to_string()), &mut state);
        assert!(matches!(event, Event::None));

        let summaries = summaries();
        let visible = state.filter(&summaries);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "igbo-language");
    }

    #[test]
    fn pressing_a_tile_requests_navigation() {
        let mut state = State::new();
        let event = update(Message::SetPressed("verbs".to_string()), &mut state);
        match event {
            Event::OpenSet(id) => assert_eq!(id, "verbs"),
            Event::None => panic!("expected OpenSet"),
        }
    }
}
