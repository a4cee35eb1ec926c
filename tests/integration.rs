// SPDX-License-Identifier: MPL-2.0
use flipdeck::config::{self, Config, MAX_SWIPE_THRESHOLD};
use flipdeck::decks::DeckLibrary;
use flipdeck::review::{ReviewSession, SwipeDirection, DEFAULT_SWIPE_THRESHOLD};
use flipdeck::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_swipe_threshold_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: default threshold
    let initial_config = Config {
        theme_mode: ThemeMode::Dark,
        swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.swipe_threshold, Some(DEFAULT_SWIPE_THRESHOLD));
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);

    // 2. Change the threshold and reload
    let wider_config = Config {
        theme_mode: ThemeMode::Dark,
        swipe_threshold: Some(120.0),
    };
    config::save_to_path(&wider_config, &temp_config_file_path)
        .expect("Failed to write updated config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load updated config from path");
    assert_eq!(reloaded.swipe_threshold, Some(120.0));

    // Out-of-range values are clamped at the point of use
    assert_eq!(
        config::clamp_swipe_threshold(10_000.0),
        MAX_SWIPE_THRESHOLD
    );

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_library_loads_embedded_sets() {
    let library = DeckLibrary::load().expect("Failed to load embedded decks");
    assert_eq!(library.len(), 3);

    let igbo = library
        .get("igbo-language")
        .expect("Igbo set should be embedded");
    assert_eq!(igbo.title, "Igbo Language");
    assert_eq!(igbo.cards.len(), 6);

    // The fallback keeps unknown ids usable
    let fallback = library.get_or_default("not-a-set");
    assert_eq!(fallback.id, library.default_set().id);
}

#[test]
fn test_full_review_run_through_a_real_deck() {
    let library = DeckLibrary::load().expect("Failed to load embedded decks");
    let deck = library
        .get("igbo-language")
        .expect("Igbo set should be embedded")
        .cards
        .clone();
    let total = deck.len();

    let mut session = ReviewSession::open(deck, 0).expect("deck is not empty");

    // Judge every card: miss the first one, get the rest right.
    session.judge_and_advance(SwipeDirection::Left);
    for _ in 1..total {
        session.judge_and_advance(SwipeDirection::Right);
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.wrong_count, 1);
    assert_eq!(snapshot.right_count as usize, total - 1);
    // The last judgement cannot advance past the final card.
    assert_eq!(snapshot.position, total - 1);
    assert!(!snapshot.revealed);
}
