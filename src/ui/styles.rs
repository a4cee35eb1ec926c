// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons, containers, and inputs.
//!
//! Every style closure takes the active [`ColorScheme`] so the same
//! components render correctly in both the indigo dark look and the light
//! variant.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Containers
// ============================================================================

/// Full-screen background.
pub fn screen(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Rounded surface card (set tiles, info rows).
pub fn surface_card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill-shaped badge (term counts).
pub fn pill_badge(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Bottom navigation bar with a top hairline.
pub fn footer_bar(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// One dot of the carousel indicator.
pub fn dot(scheme: &ColorScheme, active: bool) -> impl Fn(&Theme) -> container::Style {
    let color = if active {
        scheme.text_primary
    } else {
        scheme.surface_border
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Face of a flip card (carousel and quiz).
pub fn card_face(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: edge,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Amber trial banner pill.
pub fn banner(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let banner = scheme.banner;
    let label = palette::INDIGO_900;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::OVERLAY_HOVER,
                ..banner
            },
            _ => banner,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: label,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Study-mode action row on the detail screen.
pub fn action_row(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    let text = scheme.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => edge,
            _ => surface,
        };
        button::Style {
            background: Some(Background::Color(surface)),
            text_color: text,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Chrome button holding a bare icon (back, bookmark, overflow, close).
pub fn icon(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: 0.1,
                ..palette::WHITE
            })),
            _ => None,
        };
        button::Style {
            background,
            text_color: text,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent clickable wrapper around a whole tile.
pub fn tile(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_primary;
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Semi-opaque arrow buttons over the quiz card.
pub fn overlay_arrow(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color: text,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Rounded dark search field on the home screen.
pub fn search_input(
    scheme: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let surface = scheme.surface;
    let edge = scheme.surface_border;
    let value = scheme.text_primary;
    let placeholder = scheme.text_muted;
    let accent = scheme.accent;
    move |_theme: &Theme, status: text_input::Status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => accent,
            _ => edge,
        };
        text_input::Style {
            background: Background::Color(surface),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            icon: placeholder,
            placeholder,
            value,
            selection: accent,
        }
    }
}
