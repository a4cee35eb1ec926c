// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! quiz overlay.
//!
//! The `App` struct wires together the deck library, theming, and the
//! screen components, and translates component events into navigation.
//! Policy decisions (window sizing, fallback set for unknown ids, swipe
//! threshold clamping) stay close to the main update loop so it is easy
//! to audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::decks::{CardSet, DeckLibrary, SetSummary};
use crate::review::DEFAULT_SWIPE_THRESHOLD;
use crate::ui::home;
use crate::ui::quiz;
use crate::ui::set_detail;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// The set currently shown on the detail screen, with its view state.
pub struct DetailScreen {
    pub set: CardSet,
    pub state: set_detail::State,
}

/// Root Iced application state that bridges the screens, the quiz
/// overlay, and user preferences.
pub struct App {
    library: DeckLibrary,
    summaries: Vec<SetSummary>,
    scheme: ColorScheme,
    theme_mode: ThemeMode,
    swipe_threshold: f32,
    screen: Screen,
    home: home::State,
    detail: Option<DetailScreen>,
    quiz: Option<quiz::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("quiz_open", &self.quiz.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings: a phone-shaped portrait window, matching
/// the mock's layout.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let config = config::load(config_dir.as_deref()).unwrap_or_default();

        let theme_mode = config.theme_mode;
        let scheme = ColorScheme::for_mode(theme_mode);
        let swipe_threshold = config::clamp_swipe_threshold(
            config.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD),
        );

        // Mock content compiled into the binary; a parse failure here is a
        // broken build, not a runtime condition.
        let library = DeckLibrary::load().expect("embedded deck assets failed to parse");
        let summaries = library.summaries();

        let mut app = App {
            library,
            summaries,
            scheme,
            theme_mode,
            swipe_threshold,
            screen: Screen::Home,
            home: home::State::new(),
            detail: None,
            quiz: None,
        };

        if let Some(set_id) = flags.set {
            let set = app.library.get_or_default(&set_id).clone();
            let state = set_detail::State::new(&set);
            app.detail = Some(DetailScreen { set, state });
            app.screen = Screen::SetDetail;
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.quiz.is_some() {
            return "Cartões - Flipdeck".to_string();
        }
        match (&self.detail, self.screen) {
            (Some(detail), Screen::SetDetail) => format!("{} - Flipdeck", detail.set.title),
            _ => "Flipdeck".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(
            update::UpdateContext {
                screen: &mut self.screen,
                home: &mut self.home,
                detail: &mut self.detail,
                quiz: &mut self.quiz,
                library: &self.library,
                swipe_threshold: self.swipe_threshold,
            },
            message,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            scheme: &self.scheme,
            screen: self.screen,
            home: &self.home,
            detail: self.detail.as_ref(),
            quiz: self.quiz.as_ref(),
            summaries: &self.summaries,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription(
            self.quiz.is_some(),
            self.screen == Screen::SetDetail,
        )
    }
}
