//! Queue-driven player for deterministic tests.

use std::collections::VecDeque;

use crate::domain::{Card, Suit};
use crate::errors::PlayerError;
use crate::players::Player;

/// Plays a fixed script of bids and cards in order.
///
/// Errors when the script runs dry or a scripted card is not in the hand, so
/// a test that drifts out of sync with its fixture fails loudly instead of
/// silently playing the wrong card.
pub struct ScriptedPlayer {
    name: String,
    hand: Vec<Card>,
    bids: VecDeque<u8>,
    plays: VecDeque<Card>,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            bids: VecDeque::new(),
            plays: VecDeque::new(),
        }
    }

    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand.extend(cards);
        self
    }

    pub fn with_bids(mut self, bids: impl IntoIterator<Item = u8>) -> Self {
        self.bids.extend(bids);
        self
    }

    pub fn with_plays(mut self, plays: impl IntoIterator<Item = Card>) -> Self {
        self.plays.extend(plays);
        self
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn make_bid(&mut self, _is_last: bool, _total_bid: u8) -> Result<u8, PlayerError> {
        self.bids
            .pop_front()
            .ok_or_else(|| PlayerError::Internal(format!("{}: bid script exhausted", self.name)))
    }

    fn play_card(
        &mut self,
        _is_first: bool,
        _lead_suit: Option<Suit>,
        _trump: Option<Suit>,
    ) -> Result<Card, PlayerError> {
        let card = self
            .plays
            .pop_front()
            .ok_or_else(|| PlayerError::Internal(format!("{}: play script exhausted", self.name)))?;
        let pos = self.hand.iter().position(|&c| c == card).ok_or_else(|| {
            PlayerError::Internal(format!("{}: scripted card {card} not in hand", self.name))
        })?;
        Ok(self.hand.remove(pos))
    }
}
