// SPDX-License-Identifier: MPL-2.0
//! Flashcard set data and the embedded deck library.
//!
//! All content is mock data compiled into the binary: each set lives in a
//! TOML document under `assets/decks/` and is embedded via `rust-embed`.
//! The library is read-only; there is no persistence and no network.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/decks/"]
struct DeckAsset;

/// One flashcard: an immutable front/back pair.
///
/// Identity is the card's position in its deck; no stable id exists at
/// this scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A flashcard set: metadata plus its ordered deck of cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSet {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub description: String,
    /// Advertised term count shown on the set tile. Kept separate from
    /// `cards.len()`: the mock sets advertise their full size while only
    /// carrying a sample of cards.
    pub term_count: u32,
    pub cards: Vec<Card>,
}

/// Lightweight row for the home screen list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSummary {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub term_count: u32,
}

impl CardSet {
    pub fn summary(&self) -> SetSummary {
        SetSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            owner: self.owner.clone(),
            term_count: self.term_count,
        }
    }
}

/// In-memory library of every embedded flashcard set.
///
/// Sets keep the order of their asset filenames so the home screen renders
/// a stable list.
#[derive(Debug, Clone)]
pub struct DeckLibrary {
    sets: Vec<CardSet>,
}

impl DeckLibrary {
    /// Parses every embedded deck asset.
    ///
    /// Fails with [`Error::Deck`] if any document is malformed; embedded
    /// content is validated at build review time, so a failure here means
    /// a broken asset slipped into the binary.
    pub fn load() -> Result<Self> {
        let mut names: Vec<_> = DeckAsset::iter().collect();
        names.sort();

        let mut sets = Vec::with_capacity(names.len());
        for name in names {
            let file = DeckAsset::get(name.as_ref())
                .ok_or_else(|| Error::Deck(format!("missing embedded asset: {name}")))?;
            let content = String::from_utf8_lossy(file.data.as_ref());
            let set: CardSet = toml::from_str(&content)
                .map_err(|e| Error::Deck(format!("{name}: {e}")))?;
            sets.push(set);
        }

        if sets.is_empty() {
            return Err(Error::Deck("no deck assets embedded".to_string()));
        }
        Ok(Self { sets })
    }

    /// Looks up a set by identifier.
    pub fn get(&self, set_id: &str) -> Result<&CardSet> {
        self.sets
            .iter()
            .find(|set| set.id == set_id)
            .ok_or_else(|| Error::SetNotFound(set_id.to_string()))
    }

    /// Looks up a set, substituting the default set for unknown ids.
    ///
    /// The view layer never surfaces `SetNotFound` to the user; an unknown
    /// id falls back to the first set in the library.
    pub fn get_or_default(&self, set_id: &str) -> &CardSet {
        self.get(set_id).unwrap_or_else(|_| self.default_set())
    }

    /// The fallback set (first in the library).
    pub fn default_set(&self) -> &CardSet {
        &self.sets[0]
    }

    /// Rows for the home screen, in library order.
    pub fn summaries(&self) -> Vec<SetSummary> {
        self.sets.iter().map(CardSet::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
