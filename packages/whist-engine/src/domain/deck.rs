//! Rank-filtered, shuffled deck with trump reveal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::cards::{Card, Rank, Suit};
use crate::domain::rules;
use crate::errors::DomainError;

/// One round's deck. Owned exclusively by the round that dealt from it.
///
/// Construction filters out cards below [`rules::min_deal_rank`] for the
/// table size, so the deck always holds `8 * num_players` unique cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    trump: Option<Suit>,
    trump_card: Option<Card>,
}

impl Deck {
    pub fn new<R: Rng + ?Sized>(num_players: usize, rng: &mut R) -> Result<Self, DomainError> {
        rules::validate_player_count(num_players)?;
        let min_rank = rules::min_deal_rank(num_players);
        let mut cards: Vec<Card> = Rank::ALL
            .into_iter()
            .filter(|rank| rank.value() >= min_rank)
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card { rank, suit }))
            .collect();
        cards.shuffle(rng);
        Ok(Self {
            cards,
            trump: None,
            trump_card: None,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the next card to deal.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    /// Take the next undealt card and record its suit as the round's trump.
    ///
    /// Called once per round by the orchestrator, after dealing and never on
    /// the no-trump (hand size 8) rounds. The revealed card is set aside and
    /// not dealt.
    pub fn reveal_trump(&mut self) -> Result<Card, DomainError> {
        let card = self.cards.pop().ok_or(DomainError::EmptyDeck)?;
        self.trump = Some(card.suit);
        self.trump_card = Some(card);
        Ok(card)
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }
}
