use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// Deck build order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }

    /// First letter of the suit name, e.g. `D` for Diamonds
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Deck build order
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Base value, 1 (Ace) through 13 (King)
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// Ranks a number card can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberRank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl NumberRank {
    pub const ALL: [NumberRank; 9] = [
        NumberRank::Two,
        NumberRank::Three,
        NumberRank::Four,
        NumberRank::Five,
        NumberRank::Six,
        NumberRank::Seven,
        NumberRank::Eight,
        NumberRank::Nine,
        NumberRank::Ten,
    ];

    fn from_rank(rank: Rank) -> Option<Self> {
        Self::ALL.into_iter().find(|r| Rank::from(*r) == rank)
    }
}

impl From<NumberRank> for Rank {
    fn from(rank: NumberRank) -> Self {
        match rank {
            NumberRank::Two => Rank::Two,
            NumberRank::Three => Rank::Three,
            NumberRank::Four => Rank::Four,
            NumberRank::Five => Rank::Five,
            NumberRank::Six => Rank::Six,
            NumberRank::Seven => Rank::Seven,
            NumberRank::Eight => Rank::Eight,
            NumberRank::Nine => Rank::Nine,
            NumberRank::Ten => Rank::Ten,
        }
    }
}

/// Ranks a face card can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceRank {
    Jack,
    Queen,
    King,
}

impl FaceRank {
    pub const ALL: [FaceRank; 3] = [FaceRank::Jack, FaceRank::Queen, FaceRank::King];

    fn from_rank(rank: Rank) -> Option<Self> {
        Self::ALL.into_iter().find(|r| Rank::from(*r) == rank)
    }
}

impl From<FaceRank> for Rank {
    fn from(rank: FaceRank) -> Self {
        match rank {
            FaceRank::Jack => Rank::Jack,
            FaceRank::Queen => Rank::Queen,
            FaceRank::King => Rank::King,
        }
    }
}

/// A playing card, classified by how it counts in blackjack.
///
/// Each variant only holds the ranks it allows, so a card with the wrong rank
/// for its variant cannot be built or deserialized. Build one with
/// [`Card::new`], or with the per-variant constructors when the caller wants
/// a plain [`Rank`] checked against the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number { suit: Suit, rank: NumberRank },
    Face { suit: Suit, rank: FaceRank },
    Ace { suit: Suit },
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        if let Some(rank) = NumberRank::from_rank(rank) {
            Card::Number { suit, rank }
        } else if let Some(rank) = FaceRank::from_rank(rank) {
            Card::Face { suit, rank }
        } else {
            Card::Ace { suit }
        }
    }

    pub fn number(suit: Suit, rank: Rank) -> Result<Self> {
        NumberRank::from_rank(rank)
            .map(|rank| Card::Number { suit, rank })
            .ok_or_else(|| invalid_rank(rank, "a number"))
    }

    pub fn face(suit: Suit, rank: Rank) -> Result<Self> {
        FaceRank::from_rank(rank)
            .map(|rank| Card::Face { suit, rank })
            .ok_or_else(|| invalid_rank(rank, "a face"))
    }

    pub fn ace(suit: Suit, rank: Rank) -> Result<Self> {
        if rank != Rank::Ace {
            return Err(invalid_rank(rank, "an ace"));
        }
        Ok(Card::Ace { suit })
    }

    pub fn suit(&self) -> Suit {
        match self {
            Card::Number { suit, .. } | Card::Face { suit, .. } | Card::Ace { suit } => *suit,
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            Card::Number { rank, .. } => Rank::from(*rank),
            Card::Face { rank, .. } => Rank::from(*rank),
            Card::Ace { .. } => Rank::Ace,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Card::Ace { .. })
    }

    pub fn suit_symbol(&self) -> char {
        self.suit().symbol()
    }

    pub fn suit_name(&self) -> &'static str {
        self.suit().name()
    }

    /// `2`..`10` for number cards, the first letter of the rank name otherwise
    pub fn rank_symbol(&self) -> String {
        match self {
            Card::Number { .. } => self.rank().value().to_string(),
            Card::Face { .. } | Card::Ace { .. } => self.rank().name()[..1].to_string(),
        }
    }

    /// Shorthand such as `2D` for the Two of Diamonds
    pub fn short_name(&self) -> String {
        format!("{}{}", self.rank_symbol(), self.suit_symbol())
    }

    pub fn min_blackjack_value(&self) -> u8 {
        match self {
            Card::Number { rank, .. } => Rank::from(*rank).value(),
            Card::Face { .. } => 10,
            Card::Ace { .. } => 1,
        }
    }

    pub fn max_blackjack_value(&self) -> u8 {
        match self {
            Card::Ace { .. } => 11,
            _ => self.min_blackjack_value(),
        }
    }
}

fn invalid_rank(rank: Rank, article_kind: &str) -> Error {
    Error::Validation(format!("Rank {} is not a valid rank for {article_kind} card", rank.name()))
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit_symbol())
    }
}

/// Parses the short name form, e.g. `AS`, `10H`, `qd`.
impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::Validation(format!("'{s}' is not a card"));

        let mut chars = s.chars();
        let suit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('S') => Suit::Spades,
            Some('H') => Suit::Hearts,
            Some('C') => Suit::Clubs,
            Some('D') => Suit::Diamonds,
            _ => return Err(invalid()),
        };

        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(invalid()),
        };

        Ok(Card::new(suit, rank))
    }
}
