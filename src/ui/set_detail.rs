// SPDX-License-Identifier: MPL-2.0
//! Set detail screen: flip-card carousel, dot indicator, set info, and the
//! study-mode action list.
//!
//! Each carousel card keeps its own reveal flag ([`CardFlips`]); flipping
//! one card never affects its neighbors and nothing is scored here. The
//! "Cartões" action hands control to the quiz overlay.

use crate::decks::CardSet;
use crate::review::CardFlips;
use crate::ui::card_face::{self, FaceSize};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Detail screen state: one reveal flag per carousel card.
#[derive(Debug, Clone, Default)]
pub struct State {
    flips: CardFlips,
}

impl State {
    /// Fresh state for a set: every card shows its front.
    pub fn new(set: &CardSet) -> Self {
        Self {
            flips: CardFlips::new(set.cards.len()),
        }
    }

    pub fn flips(&self) -> &CardFlips {
        &self.flips
    }
}

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Tap on the carousel card at this index.
    CardTapped(usize),
    BackPressed,
    /// The "Cartões" study mode was chosen.
    CardsPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
    StartQuiz,
}

/// Process a detail screen message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::CardTapped(index) => {
            state.flips.toggle(index);
            Event::None
        }
        Message::BackPressed => Event::Back,
        Message::CardsPressed => Event::StartQuiz,
    }
}

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub state: &'a State,
    pub set: &'a CardSet,
}

/// Render the set detail screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .push(build_top_bar(&ctx))
        .push(build_carousel(&ctx))
        .push(build_dots(&ctx))
        .push(build_info(&ctx))
        .push(build_actions(&ctx))
        .width(Length::Fill);

    let page = scrollable(content).width(Length::Fill).height(Length::Fill);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::screen(ctx.scheme))
        .into()
}

/// Back chevron, trial banner, bookmark and overflow icons.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back = button(icons::sized(icons::chevron_left(), sizing::ICON_LG))
        .on_press(Message::BackPressed)
        .padding(spacing::XXS)
        .style(styles::icon(ctx.scheme));

    // Static chrome: the banner, bookmark, and overflow menu have no
    // behavior in the mock.
    let banner = button(text("Avaliação gratuita").size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::banner(ctx.scheme));

    let bookmark = icons::sized(icons::bookmark(), sizing::ICON_MD);
    let overflow = icons::sized(icons::dots_vertical(), sizing::ICON_MD);

    Row::new()
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(banner)
        .push(Space::new().width(Length::Fill))
        .push(bookmark)
        .push(Space::new().width(Length::Fixed(spacing::SM)))
        .push(overflow)
        .align_y(Vertical::Center)
        .padding([spacing::LG, spacing::MD])
        .width(Length::Fill)
        .into()
}

/// Horizontally scrolling row of tap-to-flip cards.
fn build_carousel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let size = FaceSize {
        width: Length::Fixed(sizing::CAROUSEL_CARD_WIDTH),
        height: sizing::CAROUSEL_CARD_HEIGHT,
        text_size: typography::BODY_LG,
    };

    let mut cards = Row::new().spacing(spacing::MD);
    for (index, card) in ctx.set.cards.iter().enumerate() {
        let face = card_face::view(card, ctx.state.flips.is_revealed(index), ctx.scheme, size);
        let tappable = button(face)
            .on_press(Message::CardTapped(index))
            .padding(0)
            .style(styles::tile(ctx.scheme));
        cards = cards.push(tappable);
    }

    scrollable(cards.padding([spacing::XXS, spacing::MD]))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .width(Length::Fill)
        .into()
}

/// Dot indicator under the carousel.
///
/// TODO: track the scroll offset so the active dot follows the carousel;
/// it currently always highlights the first card.
fn build_dots<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active_index = 0;

    let mut dots = Row::new().spacing(spacing::XXS);
    for index in 0..ctx.set.cards.len() {
        let dot = Container::new(Space::new())
            .width(Length::Fixed(sizing::DOT_SIZE))
            .height(Length::Fixed(sizing::DOT_SIZE))
            .style(styles::dot(ctx.scheme, index == active_index));
        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .padding([spacing::XS, 0.0])
        .into()
}

/// Title, owner, term count, and description.
fn build_info<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.set.title.as_str())
        .size(typography::TITLE_LG)
        .color(ctx.scheme.text_primary);

    let owner_row = Row::new()
        .push(icons::sized(icons::profile(), sizing::AVATAR_SM))
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(
            text(ctx.set.owner.as_str())
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary),
        )
        .push(
            text(" | ")
                .size(typography::BODY)
                .color(ctx.scheme.text_muted),
        )
        .push(
            text(format!("{} termos", ctx.set.term_count))
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary),
        )
        .align_y(Vertical::Center);

    let description = text(ctx.set.description.as_str())
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary);

    Column::new()
        .push(title)
        .push(Space::new().height(Length::Fixed(spacing::XXS)))
        .push(owner_row)
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(description)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .into()
}

/// Study-mode action list. Only "Cartões" is wired up; the remaining
/// modes are static rows from the mock.
fn build_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = |icon, label: &'static str, message: Option<Message>| {
        let content = Row::new()
            .push(icon)
            .push(Space::new().width(Length::Fixed(spacing::SM)))
            .push(
                text(label)
                    .size(typography::BODY_LG)
                    .color(ctx.scheme.text_primary),
            )
            .align_y(Vertical::Center)
            .width(Length::Fill);

        let mut action = button(content)
            .padding([spacing::SM, spacing::MD])
            .width(Length::Fill)
            .style(styles::action_row(ctx.scheme));
        if let Some(message) = message {
            action = action.on_press(message);
        }
        action
    };

    Column::new()
        .push(row(
            icons::sized(icons::cards_accent(), sizing::ICON_LG),
            "Cartões",
            Some(Message::CardsPressed),
        ))
        .push(row(
            icons::sized(icons::learn_accent(), sizing::ICON_LG),
            "Aprender",
            None,
        ))
        .push(row(
            icons::sized(icons::test_accent(), sizing::ICON_LG),
            "Avaliar",
            None,
        ))
        .push(row(
            icons::sized(icons::test_accent(), sizing::ICON_LG),
            "Combinar",
            None,
        ))
        .push(row(
            icons::sized(icons::learn_accent(), sizing::ICON_LG),
            "Blast",
            None,
        ))
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .into()
}
