// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Set list with search and the bottom navigation bar
//! - [`set_detail`] - Flip-card carousel, set info, and study-mode actions
//! - [`quiz`] - Full-screen swipe-through review overlay
//!
//! # Shared Infrastructure
//!
//! - [`card_face`] - Flip-card face rendering shared by carousel and quiz
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card_face;
pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod quiz;
pub mod set_detail;
pub mod styles;
pub mod theming;
