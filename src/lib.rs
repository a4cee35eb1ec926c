// SPDX-License-Identifier: MPL-2.0
//! `flipdeck` is a flashcard browser and review tool built with the Iced
//! GUI framework.
//!
//! It ships a small library of embedded card sets, a carousel-based set
//! detail screen, and a swipe-driven review session that tallies wrong
//! and right answers as the user works through a deck.

#![doc(html_root_url = "https://docs.rs/flipdeck/0.1.0")]

pub mod app;
pub mod config;
pub mod decks;
pub mod error;
pub mod review;
pub mod ui;
