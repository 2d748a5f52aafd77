use crate::error::{Error, Result};
use crate::rules::{validate_deck_multiple, STANDARD_DECK_SIZE};
use crate::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An ordered pile of cards. The front is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a deck out of `multiple` standard decks.
    ///
    /// Before shuffling, every one of the 52 identities appears `multiple`
    /// times in a row, in suit order then rank order.
    pub fn build(multiple: u32) -> Result<Self> {
        let multiple = validate_deck_multiple(multiple)? as usize;

        let mut cards = VecDeque::with_capacity(STANDARD_DECK_SIZE * multiple);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(suit, rank);
                cards.extend(std::iter::repeat(card).take(multiple));
            }
        }

        Ok(Self { cards })
    }

    /// Uniformly permute the whole deck (Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Take the top card
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(Error::OutOfCards)
    }

    /// Put a card back at the bottom
    pub fn replace(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn counts(deck: &Deck) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in deck.cards() {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_build_single_deck() {
        let deck = Deck::build(1).unwrap();
        assert_eq!(deck.len(), 52);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 1));
    }

    #[test]
    fn test_build_double_deck() {
        let deck = Deck::build(2).unwrap();
        assert_eq!(deck.len(), 104);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_build_order_groups_copies() {
        let deck = Deck::build(3).unwrap();
        let names: Vec<String> = deck.cards().take(7).map(Card::short_name).collect();
        assert_eq!(names, ["AS", "AS", "AS", "2S", "2S", "2S", "3S"]);
        assert_eq!(deck.cards().last().map(Card::short_name).as_deref(), Some("KD"));
    }

    #[test]
    fn test_build_zero_multiple_fails() {
        assert!(matches!(Deck::build(0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_shuffle_keeps_size_and_cards() {
        let mut deck = Deck::build(2).unwrap();
        let before = counts(&deck);
        let order_before: Vec<Card> = deck.cards().copied().collect();

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(1337));

        assert_eq!(deck.len(), 104);
        assert_eq!(counts(&deck), before);
        let order_after: Vec<Card> = deck.cards().copied().collect();
        assert_ne!(order_before, order_after);
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let mut a = Deck::build(1).unwrap();
        let mut b = Deck::build(1).unwrap();
        a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = Deck::build(1).unwrap();
        assert_eq!(deck.draw().unwrap().short_name(), "AS");
        assert_eq!(deck.draw().unwrap().short_name(), "2S");
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::build(1).unwrap();
        for remaining in (0..52).rev() {
            deck.draw().unwrap();
            assert_eq!(deck.len(), remaining);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(Error::OutOfCards));
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_replace_puts_card_at_bottom() {
        let mut deck = Deck::build(1).unwrap();
        let top = deck.draw().unwrap();
        deck.replace(top);
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.cards().last(), Some(&top));
        assert_eq!(deck.draw().unwrap().short_name(), "2S");
    }
}
