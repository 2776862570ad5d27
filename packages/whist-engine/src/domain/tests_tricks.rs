//! Trick resolution and play-legality tests.

use crate::domain::cards::parse_cards;
use crate::domain::seats::Seat;
use crate::domain::tricks::{legal_plays, resolve_trick};
use crate::domain::{Card, Suit};
use crate::errors::DomainError;

fn plays(tokens: &[&str]) -> Vec<(Seat, Card)> {
    parse_cards(tokens)
        .into_iter()
        .enumerate()
        .map(|(seat, card)| (seat as Seat, card))
        .collect()
}

#[test]
fn highest_lead_suit_wins_without_trumps() {
    let trick = plays(&["7S", "8S", "9S"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Diamonds)).unwrap(), 2);
}

#[test]
fn highest_trump_beats_lead_suit() {
    let trick = plays(&["7S", "TD", "JD"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Diamonds)).unwrap(), 2);
}

#[test]
fn any_trump_beats_any_non_trump() {
    let trick = plays(&["TS", "8D", "9S"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Diamonds)).unwrap(), 1);
}

#[test]
fn lead_wins_by_default_when_nothing_matches() {
    let trick = plays(&["7C", "8S", "9H"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Diamonds)).unwrap(), 0);
}

#[test]
fn highest_of_several_trumps_wins() {
    let trick = plays(&["7S", "9S", "8S"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Spades)).unwrap(), 1);
}

#[test]
fn no_trump_round_degenerates_to_lead_suit() {
    let trick = plays(&["7H", "AS", "8H"]);
    assert_eq!(resolve_trick(&trick, None).unwrap(), 2);
}

#[test]
fn full_table_of_six() {
    let trick = plays(&["4H", "KH", "AH", "2C", "3C", "QH"]);
    assert_eq!(resolve_trick(&trick, Some(Suit::Clubs)).unwrap(), 4);
    assert_eq!(resolve_trick(&trick, Some(Suit::Diamonds)).unwrap(), 2);
    assert_eq!(resolve_trick(&trick, None).unwrap(), 2);
}

#[test]
fn empty_trick_is_an_error() {
    assert_eq!(
        resolve_trick(&[], Some(Suit::Hearts)),
        Err(DomainError::EmptyTrick)
    );
}

#[test]
fn legal_plays_must_follow_lead() {
    let hand = parse_cards(&["AH", "KH", "2C", "9S"]);
    let options = legal_plays(&hand, Some(Suit::Hearts), Some(Suit::Spades));
    assert_eq!(options, parse_cards(&["AH", "KH"]));
}

#[test]
fn legal_plays_trump_obligation_when_void_in_lead() {
    let hand = parse_cards(&["2C", "9S", "TS"]);
    let options = legal_plays(&hand, Some(Suit::Hearts), Some(Suit::Spades));
    assert_eq!(options, parse_cards(&["9S", "TS"]));
}

#[test]
fn legal_plays_anything_when_void_in_lead_and_trump() {
    let hand = parse_cards(&["2C", "9D"]);
    let options = legal_plays(&hand, Some(Suit::Hearts), Some(Suit::Spades));
    assert_eq!(options, hand);
    // Same on a no-trump round
    let options = legal_plays(&hand, Some(Suit::Hearts), None);
    assert_eq!(options, hand);
}

#[test]
fn legal_plays_unrestricted_on_lead() {
    let hand = parse_cards(&["AH", "2C", "9S"]);
    assert_eq!(legal_plays(&hand, None, Some(Suit::Spades)), hand);
}
