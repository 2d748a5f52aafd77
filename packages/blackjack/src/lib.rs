//! Rules engine for single-player blackjack against a house that stands on 17.
mod card;
mod choice;
mod dealer;
mod deck;
mod error;
mod hand;
mod round;
mod rules;

pub use card::{Card, FaceRank, NumberRank, Rank, Suit};
pub use choice::PlayerChoice;
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{Error, Result};
pub use hand::{is_blackjack, is_bust, is_soft_hand, max_hand_value, min_hand_value, Hand};
pub use round::{Round, RoundResult, RoundStatus, Side};
pub use rules::{validate_deck_multiple, HOUSE_STANDS_ON, MAX_HAND_VALUE, STANDARD_DECK_SIZE};
