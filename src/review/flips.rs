// SPDX-License-Identifier: MPL-2.0
//! Per-card reveal flags for the plain carousel.
//!
//! The detail screen's carousel is the degenerate form of a review
//! session: every card keeps its own independent reveal flag, toggled by
//! its own tap, with no shared position and no tallies.

/// One reveal flag per card index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFlips {
    revealed: Vec<bool>,
}

impl CardFlips {
    /// Creates flags for a deck of `len` cards, all showing their fronts.
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Flips the card at `index`. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.revealed.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Whether the card at `index` is showing its back face.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of cards tracked.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flips_all_start_hidden() {
        let flips = CardFlips::new(4);
        assert_eq!(flips.len(), 4);
        assert!((0..4).all(|i| !flips.is_revealed(i)));
    }

    #[test]
    fn toggle_flips_only_the_given_index() {
        let mut flips = CardFlips::new(3);
        flips.toggle(1);
        assert!(!flips.is_revealed(0));
        assert!(flips.is_revealed(1));
        assert!(!flips.is_revealed(2));
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut flips = CardFlips::new(2);
        flips.toggle(0);
        flips.toggle(0);
        assert!(!flips.is_revealed(0));
    }

    #[test]
    fn flags_are_independent() {
        let mut flips = CardFlips::new(3);
        flips.toggle(0);
        flips.toggle(2);
        assert!(flips.is_revealed(0));
        assert!(!flips.is_revealed(1));
        assert!(flips.is_revealed(2));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut flips = CardFlips::new(1);
        flips.toggle(5);
        assert!(!flips.is_revealed(5));
        assert_eq!(flips.len(), 1);
    }
}
