// SPDX-License-Identifier: MPL-2.0
//! Full-screen quiz overlay.
//!
//! Owns one [`ReviewSession`] plus a [`SwipeTracker`] for the card
//! surface. A short drag (below the swipe threshold) flips the card; a
//! drag past the threshold judges it — left for wrong, right for right —
//! and advances. The overlay is created when the user picks "Cartões" and
//! dropped when it closes; the tallies never outlive it.

use crate::decks::Card;
use crate::error::Result;
use crate::review::{ReviewSession, Snapshot, SwipeTracker};
use crate::ui::card_face::{self, FaceSize};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{Element, Length, Point};

/// Quiz overlay state.
#[derive(Debug, Clone)]
pub struct State {
    session: ReviewSession,
    tracker: SwipeTracker,
    swipe_threshold: f32,
}

impl State {
    /// Opens a quiz over `deck` at its first card.
    ///
    /// Fails with [`crate::error::Error::InvalidIndex`] when the deck is
    /// empty.
    pub fn open(deck: Vec<Card>, swipe_threshold: f32) -> Result<Self> {
        Ok(Self {
            session: ReviewSession::open(deck, 0)?,
            tracker: SwipeTracker::new(),
            swipe_threshold,
        })
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot()
    }
}

/// Messages emitted by the quiz overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Cursor moved over the card surface.
    CursorMoved(Point),
    /// Press started on the card surface.
    SurfacePressed,
    /// Press ended; classified as a tap or a swipe.
    SurfaceReleased,
    /// Flip requested without a pointer (space key).
    FlipPressed,
    PrevPressed,
    NextPressed,
    ClosePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Closed,
}

/// Process a quiz message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::CursorMoved(position) => {
            state.tracker.cursor_moved(position);
            Event::None
        }
        Message::SurfacePressed => {
            state.tracker.pressed();
            Event::None
        }
        Message::SurfaceReleased => {
            let was_tracking = state.tracker.is_tracking();
            match state.tracker.released(state.swipe_threshold) {
                Some(direction) => state.session.judge_and_advance(direction),
                // A tracked press that never cleared the threshold is a tap.
                None if was_tracking => state.session.toggle_reveal(),
                None => {}
            }
            Event::None
        }
        Message::FlipPressed => {
            state.session.toggle_reveal();
            Event::None
        }
        Message::PrevPressed => {
            state.tracker.cancel();
            state.session.prev();
            Event::None
        }
        Message::NextPressed => {
            state.tracker.cancel();
            state.session.next();
            Event::None
        }
        Message::ClosePressed => Event::Closed,
    }
}

/// Contextual data needed to render the quiz overlay.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub state: &'a State,
}

/// Render the quiz overlay.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let snapshot = ctx.state.snapshot();

    let content = Column::new()
        .push(build_top_bar(ctx.scheme, &snapshot))
        .push(build_progress(ctx.scheme, &snapshot))
        .push(Space::new().height(Length::Fill))
        .push(build_card(ctx.scheme, &snapshot))
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(build_hint(ctx.scheme, &snapshot))
        .push(Space::new().height(Length::Fill))
        .push(build_nav(ctx.scheme, &snapshot))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::screen(ctx.scheme))
        .into()
}

/// Close button, position readout, and the two tallies.
fn build_top_bar<'a>(scheme: &'a ColorScheme, snapshot: &Snapshot<'a>) -> Element<'a, Message> {
    let close = button(icons::sized(icons::close(), sizing::ICON_MD))
        .on_press(Message::ClosePressed)
        .padding(spacing::XXS)
        .style(styles::icon(scheme));

    let position = text(format!("{} / {}", snapshot.position + 1, snapshot.total))
        .size(typography::BODY_LG)
        .color(scheme.text_secondary);

    let wrong = text(format!("✗ {}", snapshot.wrong_count))
        .size(typography::BODY_LG)
        .color(scheme.wrong);
    let right = text(format!("✓ {}", snapshot.right_count))
        .size(typography::BODY_LG)
        .color(scheme.right);

    Row::new()
        .push(close)
        .push(Space::new().width(Length::Fill))
        .push(wrong)
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(position)
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(right)
        .push(Space::new().width(Length::Fill))
        .push(Space::new().width(Length::Fixed(sizing::ICON_MD)))
        .align_y(Vertical::Center)
        .padding([spacing::MD, spacing::MD])
        .width(Length::Fill)
        .into()
}

/// Thin progress bar under the top bar.
fn build_progress<'a>(scheme: &'a ColorScheme, snapshot: &Snapshot<'a>) -> Element<'a, Message> {
    let done = (snapshot.position + 1) as u16;
    let remaining = (snapshot.total - snapshot.position - 1) as u16;

    let mut bar = Row::new().push(
        Container::new(Space::new())
            .width(Length::FillPortion(done))
            .height(Length::Fixed(spacing::XXS))
            .style(styles::dot(scheme, true)),
    );
    if remaining > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(remaining))
                .height(Length::Fixed(spacing::XXS))
                .style(styles::dot(scheme, false)),
        );
    }

    Container::new(bar)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .into()
}

/// The swipeable card surface.
fn build_card<'a>(scheme: &'a ColorScheme, snapshot: &Snapshot<'a>) -> Element<'a, Message> {
    let size = FaceSize {
        width: Length::Fill,
        height: sizing::QUIZ_CARD_HEIGHT,
        text_size: typography::TITLE_MD,
    };
    let face = card_face::view(snapshot.card, snapshot.revealed, scheme, size);

    let surface = mouse_area(face)
        .on_move(Message::CursorMoved)
        .on_press(Message::SurfacePressed)
        .on_release(Message::SurfaceReleased);

    Container::new(surface)
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .into()
}

/// One-line gesture hint under the card.
fn build_hint<'a>(scheme: &'a ColorScheme, snapshot: &Snapshot<'a>) -> Element<'a, Message> {
    let hint = if snapshot.revealed {
        "Arraste para a esquerda se errou, para a direita se acertou"
    } else {
        "Toque no cartão para virar"
    };

    Container::new(
        text(hint)
            .size(typography::BODY)
            .color(scheme.text_muted),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

/// Prev/next arrows, disabled at the deck boundaries.
fn build_nav<'a>(scheme: &'a ColorScheme, snapshot: &Snapshot<'a>) -> Element<'a, Message> {
    let prev = button(text("◀").size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay_arrow(scheme));
    let prev = if snapshot.position > 0 {
        prev.on_press(Message::PrevPressed)
    } else {
        prev
    };

    let next = button(text("▶").size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay_arrow(scheme));
    let next = if snapshot.position + 1 < snapshot.total {
        next.on_press(Message::NextPressed)
    } else {
        next
    };

    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(prev)
        .push(Space::new().width(Length::Fixed(spacing::XL)))
        .push(next)
        .push(Space::new().width(Length::Fill))
        .padding([spacing::LG, 0.0])
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::review::DEFAULT_SWIPE_THRESHOLD;

    fn igbo_deck() -> Vec<Card> {
        vec![Card::new("Nne", "Mother"), Card::new("Nna", "Father")]
    }

    fn open_state() -> State {
        State::open(igbo_deck(), DEFAULT_SWIPE_THRESHOLD).expect("open failed")
    }

    fn drag(state: &mut State, from: Point, to: Point) {
        update(Message::CursorMoved(from), state);
        update(Message::SurfacePressed, state);
        update(Message::CursorMoved(to), state);
        update(Message::SurfaceReleased, state);
    }

    #[test]
    fn open_over_empty_deck_fails() {
        let result = State::open(Vec::new(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(result.unwrap_err(), Error::InvalidIndex);
    }

    #[test]
    fn tap_flips_the_card() {
        let mut state = open_state();
        drag(
            &mut state,
            Point::new(100.0, 50.0),
            Point::new(110.0, 55.0),
        );
        assert!(state.snapshot().revealed);
    }

    #[test]
    fn long_left_drag_judges_wrong_and_advances() {
        let mut state = open_state();
        drag(&mut state, Point::new(200.0, 50.0), Point::new(80.0, 50.0));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.wrong_count, 1);
        assert_eq!(snapshot.right_count, 0);
        assert_eq!(snapshot.position, 1);
        assert!(!snapshot.revealed);
    }

    #[test]
    fn long_right_drag_judges_right_and_advances() {
        let mut state = open_state();
        drag(&mut state, Point::new(80.0, 50.0), Point::new(200.0, 50.0));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.right_count, 1);
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.position, 1);
    }

    #[test]
    fn short_drag_is_a_tap_not_a_judgment() {
        let mut state = open_state();
        drag(&mut state, Point::new(100.0, 50.0), Point::new(70.0, 50.0));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.right_count, 0);
        assert_eq!(snapshot.position, 0);
        assert!(snapshot.revealed);
    }

    #[test]
    fn buttons_navigate_without_scoring() {
        let mut state = open_state();
        update(Message::NextPressed, &mut state);
        update(Message::PrevPressed, &mut state);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.position, 0);
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.right_count, 0);
    }

    #[test]
    fn space_flip_round_trips() {
        let mut state = open_state();
        update(Message::FlipPressed, &mut state);
        assert!(state.snapshot().revealed);
        update(Message::FlipPressed, &mut state);
        assert!(!state.snapshot().revealed);
    }

    #[test]
    fn close_emits_the_closed_event() {
        let mut state = open_state();
        assert!(matches!(
            update(Message::ClosePressed, &mut state),
            Event::Closed
        ));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut state = open_state();
        update(Message::CursorMoved(Point::new(10.0, 10.0)), &mut state);
        update(Message::SurfaceReleased, &mut state);

        let snapshot = state.snapshot();
        assert!(!snapshot.revealed);
        assert_eq!(snapshot.position, 0);
    }
}
