// SPDX-License-Identifier: MPL-2.0
//! Quiz session state machine.
//!
//! A [`ReviewSession`] owns an ordered deck of cards, the current position,
//! the reveal state of the current card, and the cumulative right/wrong
//! tallies. It is the single source of truth for the full-screen quiz: the
//! view forwards user intents (tap, button press, classified swipe) and
//! renders from [`ReviewSession::snapshot`].
//!
//! The session is created when the quiz opens and dropped when it closes;
//! nothing survives across sessions.

use crate::decks::Card;
use crate::error::{Error, Result};
use crate::review::gesture::SwipeDirection;

/// State machine for one swipe-through review of a deck.
///
/// States are identified by `(position, revealed)`. Reveal transitions keep
/// the position; navigation transitions change the position and force the
/// card back to its front face. There is no terminal state: the session ends
/// when its owner drops it, not by reaching a deck boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSession {
    /// Ordered deck under review, fixed for the lifetime of the session.
    deck: Vec<Card>,
    /// Index of the current card, always in `0..deck.len()`.
    position: usize,
    /// Whether the back face of the current card is showing.
    revealed: bool,
    /// Cards judged wrong (left swipe). Never decremented.
    wrong_count: u32,
    /// Cards judged right (right swipe). Never decremented.
    right_count: u32,
}

/// Read-only view of the session for rendering.
///
/// Side-effect-free; safe to build on every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub card: &'a Card,
    pub position: usize,
    pub total: usize,
    pub revealed: bool,
    pub wrong_count: u32,
    pub right_count: u32,
}

impl ReviewSession {
    /// Opens a session over `deck`, starting at `start_index`.
    ///
    /// The start index is clamped into range; an empty deck is a hard
    /// precondition violation and fails with [`Error::InvalidIndex`].
    pub fn open(deck: Vec<Card>, start_index: usize) -> Result<Self> {
        if deck.is_empty() {
            return Err(Error::InvalidIndex);
        }
        let position = start_index.min(deck.len() - 1);
        Ok(Self {
            deck,
            position,
            revealed: false,
            wrong_count: 0,
            right_count: 0,
        })
    }

    /// Shows the back face of the current card. Idempotent.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Flips the current card between its front and back face.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Advances to the next card, hiding its back face.
    ///
    /// No-op at the end of the deck: the last card stays visible rather
    /// than wrapping or closing the session.
    pub fn next(&mut self) {
        if self.position + 1 < self.deck.len() {
            self.position += 1;
            self.revealed = false;
        }
    }

    /// Moves back to the previous card, hiding its back face.
    ///
    /// No-op at the start of the deck.
    pub fn prev(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.revealed = false;
        }
    }

    /// Records a judgment for the current card, then advances.
    ///
    /// A left swipe counts the card wrong, a right swipe counts it right.
    /// This is the only operation that mutates the tallies; plain
    /// navigation never does. The advance is the same clamped transition
    /// as [`ReviewSession::next`], so judging the last card bumps the
    /// tally but keeps it visible.
    pub fn judge_and_advance(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.wrong_count += 1,
            SwipeDirection::Right => self.right_count += 1,
        }
        self.next();
    }

    /// Returns the read-only snapshot the view renders from.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            card: &self.deck[self.position],
            position: self.position,
            total: self.deck.len(),
            revealed: self.revealed,
            wrong_count: self.wrong_count,
            right_count: self.right_count,
        }
    }

    /// Whether a card exists after the current one.
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.deck.len()
    }

    /// Whether a card exists before the current one.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn igbo_deck() -> Vec<Card> {
        vec![
            Card::new("Nne", "Mother"),
            Card::new("Nna", "Father"),
        ]
    }

    fn deck_of(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("front {i}"), format!("back {i}")))
            .collect()
    }

    #[test]
    fn open_starts_at_requested_index_with_front_face() {
        for start in 0..3 {
            let session = ReviewSession::open(deck_of(3), start).expect("open failed");
            let snapshot = session.snapshot();
            assert_eq!(snapshot.position, start);
            assert!(!snapshot.revealed);
            assert_eq!(snapshot.wrong_count, 0);
            assert_eq!(snapshot.right_count, 0);
            assert_eq!(snapshot.total, 3);
        }
    }

    #[test]
    fn open_clamps_out_of_range_start_index() {
        let session = ReviewSession::open(deck_of(3), 99).expect("open failed");
        assert_eq!(session.snapshot().position, 2);
    }

    #[test]
    fn open_empty_deck_fails_with_invalid_index() {
        let result = ReviewSession::open(Vec::new(), 0);
        assert_eq!(result.unwrap_err(), Error::InvalidIndex);
    }

    #[test]
    fn next_stops_at_last_card() {
        let mut session = ReviewSession::open(deck_of(2), 1).expect("open failed");
        session.next();
        assert_eq!(session.snapshot().position, 1);
    }

    #[test]
    fn prev_stops_at_first_card() {
        let mut session = ReviewSession::open(deck_of(2), 0).expect("open failed");
        session.prev();
        assert_eq!(session.snapshot().position, 0);
    }

    #[test]
    fn navigation_hides_the_back_face() {
        let mut session = ReviewSession::open(deck_of(3), 1).expect("open failed");

        session.reveal();
        session.next();
        assert!(!session.snapshot().revealed);

        session.reveal();
        session.prev();
        assert!(!session.snapshot().revealed);

        session.reveal();
        session.judge_and_advance(SwipeDirection::Right);
        assert!(!session.snapshot().revealed);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut session = ReviewSession::open(deck_of(1), 0).expect("open failed");
        session.reveal();
        session.reveal();
        assert!(session.snapshot().revealed);
    }

    #[test]
    fn toggle_reveal_round_trips() {
        let mut session = ReviewSession::open(deck_of(1), 0).expect("open failed");
        session.toggle_reveal();
        assert!(session.snapshot().revealed);
        session.toggle_reveal();
        assert!(!session.snapshot().revealed);
    }

    #[test]
    fn left_judgment_only_bumps_wrong_count() {
        let mut session = ReviewSession::open(deck_of(3), 0).expect("open failed");
        session.judge_and_advance(SwipeDirection::Left);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.wrong_count, 1);
        assert_eq!(snapshot.right_count, 0);
        assert_eq!(snapshot.position, 1);
    }

    #[test]
    fn right_judgment_only_bumps_right_count() {
        let mut session = ReviewSession::open(deck_of(3), 0).expect("open failed");
        session.judge_and_advance(SwipeDirection::Right);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.right_count, 1);
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.position, 1);
    }

    #[test]
    fn plain_navigation_never_touches_the_tallies() {
        let mut session = ReviewSession::open(deck_of(3), 0).expect("open failed");
        session.next();
        session.prev();
        session.next();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.wrong_count, 0);
        assert_eq!(snapshot.right_count, 0);
    }

    #[test]
    fn judging_past_the_end_keeps_counting() {
        // Two right swipes on a two-card deck: the second judgment lands on
        // the last card, bumps the tally, and stays put.
        let mut session = ReviewSession::open(igbo_deck(), 0).expect("open failed");

        session.reveal();
        assert!(session.snapshot().revealed);

        session.judge_and_advance(SwipeDirection::Right);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.position, 1);
        assert!(!snapshot.revealed);
        assert_eq!(snapshot.right_count, 1);
        assert_eq!(snapshot.wrong_count, 0);

        session.judge_and_advance(SwipeDirection::Right);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.right_count, 2);
    }

    #[test]
    fn snapshot_exposes_the_current_card() {
        let session = ReviewSession::open(igbo_deck(), 1).expect("open failed");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.card.front, "Nna");
        assert_eq!(snapshot.card.back, "Father");
        assert_eq!(snapshot.total, 2);
    }

    #[test]
    fn has_next_and_has_previous_track_boundaries() {
        let mut session = ReviewSession::open(deck_of(2), 0).expect("open failed");
        assert!(session.has_next());
        assert!(!session.has_previous());

        session.next();
        assert!(!session.has_next());
        assert!(session.has_previous());
    }
}
