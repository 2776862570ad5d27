//! Random legal player.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::rules::legal_bids;
use crate::domain::{legal_plays, Card, Suit};
use crate::errors::PlayerError;
use crate::players::Player;

/// Picks uniformly from the legal bids and plays; never returns an illegal
/// value. Seedable for deterministic games.
pub struct RandomPlayer {
    name: String,
    hand: Vec<Card>,
    rng: StdRng,
}

impl RandomPlayer {
    /// `seed` makes the player deterministic; `None` uses OS entropy.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            hand: Vec::new(),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn make_bid(&mut self, is_last: bool, total_bid: u8) -> Result<u8, PlayerError> {
        let bids = legal_bids(self.hand.len() as u8, is_last, total_bid);
        bids.choose(&mut self.rng)
            .copied()
            .ok_or_else(|| PlayerError::Internal("no legal bid available".into()))
    }

    fn play_card(
        &mut self,
        _is_first: bool,
        lead_suit: Option<Suit>,
        trump: Option<Suit>,
    ) -> Result<Card, PlayerError> {
        let options = legal_plays(&self.hand, lead_suit, trump);
        let card = options
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| PlayerError::Internal("no card left to play".into()))?;
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| PlayerError::Internal("chosen card missing from hand".into()))?;
        Ok(self.hand.remove(pos))
    }
}
