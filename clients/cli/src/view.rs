//! Text rendering of a round. The house's hole card stays hidden until the
//! player's turn is over.

use blackjack::{Card, Hand, Round};

pub const SEPARATOR: &str = "--------------------";
const HIDDEN_CARD: &str = "??";
const HIDDEN_VALUE: &str = "?";

pub fn welcome() -> String {
    format!("{SEPARATOR}\nStarting a new round")
}

pub fn prompt() -> String {
    format!("{SEPARATOR}\n1) Stick or 2) Hit")
}

pub fn play_again_prompt() -> &'static str {
    "Play another round? (y/n)"
}

/// Both hands, with the house's last card masked unless `reveal_house`
pub fn round(round: &Round, reveal_house: bool) -> String {
    let player = format!(
        "{} {}",
        cards_string(round.player_hand().cards()),
        values_string(round.player_hand())
    );
    let house = if reveal_house {
        format!(
            "{} {}",
            cards_string(round.house_hand().cards()),
            values_string(round.house_hand())
        )
    } else {
        masked_house(round.house_hand())
    };

    format!("{SEPARATOR}\nPlayer : {player}\nHouse  : {house}")
}

/// Full view plus the outcome line
pub fn final_round(round: &Round) -> String {
    format!("{}\nResult : {}", self::round(round, true), round.result())
}

fn masked_house(hand: &Hand) -> String {
    let mut names: Vec<String> = hand.cards().iter().map(Card::short_name).collect();
    if let Some(last) = names.last_mut() {
        *last = HIDDEN_CARD.to_string();
    }
    format!("{} ({HIDDEN_VALUE})", names.join(", "))
}

pub fn cards_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::short_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `(n)` for a hard hand, `(hard/soft)` while an ace still counts as 11
pub fn values_string(hand: &Hand) -> String {
    if hand.min_value() == hand.max_value() {
        format!("({})", hand.max_value())
    } else {
        format!("({}/{})", hand.min_value(), hand.max_value())
    }
}
