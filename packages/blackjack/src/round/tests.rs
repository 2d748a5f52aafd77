use super::*;
use crate::Card;

fn hand(short_names: &[&str]) -> Hand {
    short_names.iter().map(|s| s.parse::<Card>().unwrap()).collect()
}

fn round(player: &[&str], house: &[&str]) -> Round {
    Round::new(hand(player), hand(house))
}

#[test]
fn test_both_blackjack_is_push() {
    let r = round(&["AH", "KS"], &["AC", "KD"]);
    assert_eq!(r.result(), RoundResult::Push);
    assert_eq!(r.status(), RoundStatus::Dead);
}

#[test]
fn test_house_blackjack_beats_twenty() {
    let r = round(&["KH", "KS"], &["AC", "KD"]);
    assert_eq!(r.result(), RoundResult::House);
    assert_eq!(r.status(), RoundStatus::Dead);
}

#[test]
fn test_house_bust_player_wins() {
    let r = round(&["10H", "9S"], &["KC", "QD", "5H"]);
    assert_eq!(r.result(), RoundResult::Player);
    assert_eq!(r.status(), RoundStatus::Dead);
}

#[test]
fn test_player_bust_loses_regardless_of_house() {
    for house in [
        vec!["KC", "QD", "5H"],
        vec!["2C", "3D"],
        vec!["KC", "QD"],
        vec!["AC", "5D"],
    ] {
        let r = round(&["KH", "QS", "5C"], &house);
        assert_eq!(r.result(), RoundResult::House, "{house:?}");
        assert_eq!(r.status(), RoundStatus::Dead);
    }
}

#[test]
fn test_player_blackjack_against_plain_21_pushes() {
    // only the house's blackjack is checked, otherwise totals are compared
    let r = round(&["AH", "KS"], &["7C", "7D", "7H"]);
    assert_eq!(r.result(), RoundResult::Push);
    assert_eq!(r.status(), RoundStatus::Live);
}

#[test]
fn test_compare_max_values() {
    assert_eq!(round(&["10H", "9S"], &["10C", "8D"]).result(), RoundResult::Player);
    assert_eq!(round(&["10H", "7S"], &["10C", "8D"]).result(), RoundResult::House);
    assert_eq!(round(&["10H", "8S"], &["KC", "8D"]).result(), RoundResult::Push);
}

#[test]
fn test_compare_uses_soft_totals() {
    // soft 18 against hard 17
    let r = round(&["AH", "7S"], &["10C", "7D"]);
    assert_eq!(r.result(), RoundResult::Player);
}

#[test]
fn test_status_live_when_nobody_done() {
    let r = round(&["10H", "6S"], &["9C", "7D"]);
    assert_eq!(r.status(), RoundStatus::Live);
    assert!(r.is_live());
}

#[test]
fn test_status_ignores_player_blackjack() {
    let r = round(&["AH", "KS"], &["9C", "7D"]);
    assert_eq!(r.status(), RoundStatus::Live);
}

#[test]
fn test_result_recomputed_after_hit() {
    let mut r = round(&["10H", "6S"], &["10C", "7D"]);
    assert_eq!(r.result(), RoundResult::House);

    r.hand_mut(Side::Player).add("3C".parse().unwrap());
    assert_eq!(r.result(), RoundResult::Player);
    assert_eq!(r.status(), RoundStatus::Live);

    r.hand_mut(Side::Player).add("5C".parse().unwrap());
    assert_eq!(r.result(), RoundResult::House);
    assert_eq!(r.status(), RoundStatus::Dead);
}

#[test]
fn test_hand_by_side() {
    let r = round(&["10H", "6S"], &["9C", "7D"]);
    assert_eq!(r.hand(Side::Player), r.player_hand());
    assert_eq!(r.hand(Side::House), r.house_hand());
}

#[test]
fn test_labels() {
    assert_eq!(RoundResult::House.to_string(), "HOUSE");
    assert_eq!(RoundResult::Player.to_string(), "PLAYER");
    assert_eq!(RoundResult::Push.to_string(), "PUSH");
    assert_eq!(RoundStatus::Live.label(), "LIVE");
    assert_eq!(RoundStatus::Dead.to_string(), "DEAD");
}

#[test]
fn test_round_serializes_with_hands() {
    let r = round(&["AH", "7S"], &["10C", "7D"]);
    let json = serde_json::to_string(&r).unwrap();
    let back: Round = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
    assert_eq!(back.result(), RoundResult::Player);
}
