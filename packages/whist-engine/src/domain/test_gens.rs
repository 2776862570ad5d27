// Proptest generators for domain types.
// Tricks need unique cards, so card sets are drawn as shuffled prefixes of
// the full 52-card space rather than independently.

use proptest::prelude::*;

use crate::domain::seats::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Spades),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

/// Optional trump: `None` models the no-trump rounds.
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop_oneof![Just(None), suit().prop_map(Some)]
}

fn all_cards() -> Vec<Card> {
    Rank::ALL
        .into_iter()
        .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card { rank, suit }))
        .collect()
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(all_cards()).prop_shuffle().prop_map(move |mut cards| {
        cards.truncate(count);
        cards
    })
}

/// A complete trick for a random table size: one unique card per seat, the
/// seat order matching play order.
pub fn trick_plays() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (3usize..=6).prop_flat_map(|n| {
        unique_cards(n).prop_map(|cards| {
            cards
                .into_iter()
                .enumerate()
                .map(|(seat, card)| (seat as Seat, card))
                .collect()
        })
    })
}
