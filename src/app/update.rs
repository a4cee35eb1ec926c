// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function, which forwards
//! component messages and applies the navigation events they emit.

use super::{DetailScreen, Message, Screen};
use crate::decks::DeckLibrary;
use crate::ui::home;
use crate::ui::quiz;
use crate::ui::set_detail;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub home: &'a mut home::State,
    pub detail: &'a mut Option<DetailScreen>,
    pub quiz: &'a mut Option<quiz::State>,
    pub library: &'a DeckLibrary,
    pub swipe_threshold: f32,
}

/// Main update entrypoint: routes a message to its component and applies
/// the resulting navigation event.
pub fn update(ctx: UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Home(message) => {
            match home::update(message, ctx.home) {
                home::Event::None => {}
                home::Event::OpenSet(id) => {
                    // Unknown ids fall back to the default set instead of
                    // surfacing an error.
                    let set = ctx.library.get_or_default(&id).clone();
                    let state = set_detail::State::new(&set);
                    *ctx.detail = Some(DetailScreen { set, state });
                    *ctx.screen = Screen::SetDetail;
                }
            }
            Task::none()
        }
        Message::SetDetail(message) => {
            if let Some(detail) = ctx.detail.as_mut() {
                match set_detail::update(message, &mut detail.state) {
                    set_detail::Event::None => {}
                    set_detail::Event::Back => {
                        *ctx.detail = None;
                        *ctx.screen = Screen::Home;
                    }
                    set_detail::Event::StartQuiz => {
                        // A set with no cards cannot open a session; the
                        // action row stays inert in that case.
                        if let Ok(state) =
                            quiz::State::open(detail.set.cards.clone(), ctx.swipe_threshold)
                        {
                            *ctx.quiz = Some(state);
                        }
                    }
                }
            }
            Task::none()
        }
        Message::Quiz(message) => {
            if let Some(state) = ctx.quiz.as_mut() {
                match quiz::update(message, state) {
                    quiz::Event::None => {}
                    quiz::Event::Closed => {
                        // Dropping the session discards its tallies;
                        // reopening starts fresh.
                        *ctx.quiz = None;
                    }
                }
            }
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        screen: Screen,
        home: home::State,
        detail: Option<DetailScreen>,
        quiz: Option<quiz::State>,
        library: DeckLibrary,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                screen: Screen::Home,
                home: home::State::new(),
                detail: None,
                quiz: None,
                library: DeckLibrary::load().expect("embedded decks failed to parse"),
            }
        }

        fn dispatch(&mut self, message: Message) {
            let ctx = UpdateContext {
                screen: &mut self.screen,
                home: &mut self.home,
                detail: &mut self.detail,
                quiz: &mut self.quiz,
                library: &self.library,
                swipe_threshold: crate::review::DEFAULT_SWIPE_THRESHOLD,
            };
            let _ = update(ctx, message);
        }
    }

    #[test]
    fn opening_a_set_switches_to_the_detail_screen() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "igbo-language".to_string(),
        )));

        assert_eq!(harness.screen, Screen::SetDetail);
        let detail = harness.detail.as_ref().expect("detail missing");
        assert_eq!(detail.set.id, "igbo-language");
    }

    #[test]
    fn opening_an_unknown_set_falls_back_to_the_default() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "klingon".to_string(),
        )));

        let detail = harness.detail.as_ref().expect("detail missing");
        assert_eq!(detail.set.id, harness.library.default_set().id);
    }

    #[test]
    fn back_returns_to_home_and_drops_detail_state() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "verbs".to_string(),
        )));
        harness.dispatch(Message::SetDetail(set_detail::Message::BackPressed));

        assert_eq!(harness.screen, Screen::Home);
        assert!(harness.detail.is_none());
    }

    #[test]
    fn cards_action_opens_the_quiz_overlay() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "igbo-language".to_string(),
        )));
        harness.dispatch(Message::SetDetail(set_detail::Message::CardsPressed));

        let quiz = harness.quiz.as_ref().expect("quiz missing");
        let snapshot = quiz.snapshot();
        assert_eq!(snapshot.position, 0);
        assert_eq!(snapshot.total, 6);
        assert_eq!(snapshot.card.front, "Nne");
    }

    #[test]
    fn closing_the_quiz_resets_everything_on_reopen() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "igbo-language".to_string(),
        )));
        harness.dispatch(Message::SetDetail(set_detail::Message::CardsPressed));

        harness.dispatch(Message::Quiz(quiz::Message::FlipPressed));
        harness.dispatch(Message::Quiz(quiz::Message::NextPressed));
        harness.dispatch(Message::Quiz(quiz::Message::ClosePressed));
        assert!(harness.quiz.is_none());

        // The detail screen stays where it was; a new quiz starts fresh.
        harness.dispatch(Message::SetDetail(set_detail::Message::CardsPressed));
        let snapshot = harness.quiz.as_ref().expect("quiz missing").snapshot();
        assert_eq!(snapshot.position, 0);
        assert!(!snapshot.revealed);
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.right_count, 0);
    }

    #[test]
    fn quiz_messages_without_an_open_quiz_are_ignored() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Quiz(quiz::Message::FlipPressed));
        assert!(harness.quiz.is_none());
        assert_eq!(harness.screen, Screen::Home);
    }

    #[test]
    fn flipping_carousel_cards_survives_a_quiz_round_trip() {
        let mut harness = Harness::new();
        harness.dispatch(Message::Home(home::Message::SetPressed(
            "igbo-language".to_string(),
        )));
        harness.dispatch(Message::SetDetail(set_detail::Message::CardTapped(2)));

        harness.dispatch(Message::SetDetail(set_detail::Message::CardsPressed));
        harness.dispatch(Message::Quiz(quiz::Message::ClosePressed));

        let detail = harness.detail.as_ref().expect("detail missing");
        assert!(detail.state.flips().is_revealed(2));
    }
}
