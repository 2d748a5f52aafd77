use crate::Hand;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Which side of the table a hand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Live,
    Dead,
}

impl RoundStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RoundStatus::Live => "LIVE",
            RoundStatus::Dead => "DEAD",
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a round as it stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    House,
    Player,
    Push,
}

impl RoundResult {
    pub fn label(&self) -> &'static str {
        match self {
            RoundResult::House => "HOUSE",
            RoundResult::Player => "PLAYER",
            RoundResult::Push => "PUSH",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One player hand against one house hand.
///
/// Status and result are derived from the hands every time they are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    player_hand: Hand,
    house_hand: Hand,
}

impl Round {
    pub fn new(player_hand: Hand, house_hand: Hand) -> Self {
        Self {
            player_hand,
            house_hand,
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn house_hand(&self) -> &Hand {
        &self.house_hand
    }

    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::House => &self.house_hand,
        }
    }

    pub fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::House => &mut self.house_hand,
        }
    }

    /// Dead once the house has blackjack or either side is bust
    pub fn status(&self) -> RoundStatus {
        if self.house_hand.is_blackjack()
            || self.player_hand.is_bust()
            || self.house_hand.is_bust()
        {
            RoundStatus::Dead
        } else {
            RoundStatus::Live
        }
    }

    pub fn is_live(&self) -> bool {
        self.status() == RoundStatus::Live
    }

    /// Who wins if the round ended now. Independent of [`Round::status`].
    pub fn result(&self) -> RoundResult {
        // House blackjack is checked before the player's bust
        if self.house_hand.is_blackjack() {
            return if self.player_hand.is_blackjack() {
                RoundResult::Push
            } else {
                RoundResult::House
            };
        }
        if self.player_hand.is_bust() {
            return RoundResult::House;
        }
        if self.house_hand.is_bust() {
            return RoundResult::Player;
        }

        match self.player_hand.max_value().cmp(&self.house_hand.max_value()) {
            Ordering::Greater => RoundResult::Player,
            Ordering::Less => RoundResult::House,
            Ordering::Equal => RoundResult::Push,
        }
    }
}

#[cfg(test)]
mod tests;
