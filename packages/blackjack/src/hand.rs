use crate::rules::MAX_HAND_VALUE;
use crate::Card;
use serde::{Deserialize, Serialize};

/// Hard total: every ace counts as 1
pub fn min_hand_value(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.min_blackjack_value())).sum()
}

/// Soft total: at most one ace counts as 11.
///
/// Falls back to the hard total once the soft total goes over 21, so the
/// result only exceeds 21 when the hand is bust either way.
pub fn max_hand_value(cards: &[Card]) -> u32 {
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
    let mut total: u32 = cards.iter().map(|c| u32::from(c.max_blackjack_value())).sum();

    if aces > 1 {
        total -= (aces - 1) * 10;
    }

    if total > MAX_HAND_VALUE {
        min_hand_value(cards)
    } else {
        total
    }
}

/// Check if a hand is soft (an ace is currently counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    max_hand_value(cards) != min_hand_value(cards)
}

/// Check if a hand is bust under both the hard and the soft total
pub fn is_bust(cards: &[Card]) -> bool {
    min_hand_value(cards) > MAX_HAND_VALUE && max_hand_value(cards) > MAX_HAND_VALUE
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && max_hand_value(cards) == MAX_HAND_VALUE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn min_value(&self) -> u32 {
        min_hand_value(&self.cards)
    }

    pub fn max_value(&self) -> u32 {
        max_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
