// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are the mock app's inline SVGs, embedded as static strings and
//! rendered with Iced's `svg` widget. Handles are cached with `OnceLock`
//! so each icon is parsed once per process.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not
//! the action context (e.g. `chevron_left`, not `go_back`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

// ============================================================================
// White chrome icons (footer navigation, top bars)
// ============================================================================

static HOME_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M3 12L12 3l9 9" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M9 21V12h6v9" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

static PLUS_CIRCLE_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10" stroke="#fff" stroke-width="2"/><path d="M12 8v8M8 12h8" stroke="#fff" stroke-width="2" stroke-linecap="round"/></svg>"##;

static LIBRARY_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="16" height="12" rx="2" stroke="#fff" stroke-width="2"/><path d="M8 10h8M8 14h5" stroke="#fff" stroke-width="2" stroke-linecap="round"/></svg>"##;

static CHEVRON_LEFT_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M15 19l-7-7 7-7" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

static BOOKMARK_SVG: &str = r##"<svg width="24" height="24" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M19 21l-7-5-7 5V5a2 2 0 012-2h10a2 2 0 012 2z" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

static DOTS_VERTICAL_SVG: &str = r##"<svg width="24" height="24" fill="#fff" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="2"/><circle cx="12" cy="5" r="2"/><circle cx="12" cy="19" r="2"/></svg>"##;

static CLOSE_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M6 6l12 12M18 6L6 18" stroke="#fff" stroke-width="2" stroke-linecap="round"/></svg>"##;

static PROFILE_SVG: &str = r##"<svg width="40" height="40" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10" stroke="#35356B" stroke-width="2" fill="#23234A"/><circle cx="12" cy="9.5" r="3" stroke="#fff" stroke-width="1.5"/><path d="M5.5 19a7 7 0 0113 0" stroke="#fff" stroke-width="1.5" stroke-linecap="round"/></svg>"##;

// ============================================================================
// Sky blue study-mode icons (detail screen action rows)
// ============================================================================

static CARDS_ACCENT_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="16" height="12" rx="2" stroke="#4FC3F7" stroke-width="2"/><path d="M8 10h8M8 14h5" stroke="#4FC3F7" stroke-width="2" stroke-linecap="round"/></svg>"##;

static LEARN_ACCENT_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10" stroke="#4FC3F7" stroke-width="2"/><path d="M12 8v8M8 12h8" stroke="#4FC3F7" stroke-width="2" stroke-linecap="round"/></svg>"##;

static TEST_ACCENT_SVG: &str = r##"<svg width="28" height="28" fill="none" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="16" height="12" rx="2" stroke="#4FC3F7" stroke-width="2" stroke-linecap="round"/></svg>"##;

define_icon!(home, HOME_SVG, "House outline for the footer home tab.");
define_icon!(
    plus_circle,
    PLUS_CIRCLE_SVG,
    "Circled plus for the footer create button."
);
define_icon!(
    library,
    LIBRARY_SVG,
    "Stacked cards outline for the footer library tab."
);
define_icon!(chevron_left, CHEVRON_LEFT_SVG, "Left chevron.");
define_icon!(bookmark, BOOKMARK_SVG, "Bookmark outline.");
define_icon!(dots_vertical, DOTS_VERTICAL_SVG, "Vertical overflow dots.");
define_icon!(close, CLOSE_SVG, "Close cross for the quiz overlay.");
define_icon!(profile, PROFILE_SVG, "Round profile placeholder.");
define_icon!(
    cards_accent,
    CARDS_ACCENT_SVG,
    "Sky blue cards icon for the Cards study mode."
);
define_icon!(
    learn_accent,
    LEARN_ACCENT_SVG,
    "Sky blue circled plus for the Learn study mode."
);
define_icon!(
    test_accent,
    TEST_ACCENT_SVG,
    "Sky blue rectangle for the Test/Match study modes."
);
