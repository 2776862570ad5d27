//! Player capability: bidding and card-play decisions.
//!
//! The orchestrator drives every seat through this one trait; concrete
//! variants decide interactively (console), randomly, or from a script. A
//! player owns its own hand: deals append to it and plays remove from it.
//! Legality of the returned values is the player's responsibility; the
//! engine records whatever comes back. Compliant implementations build on
//! [`crate::domain::rules::legal_bids`] and [`crate::domain::legal_plays`].

mod random;
mod scripted;

pub use random::RandomPlayer;
pub use scripted::ScriptedPlayer;

use crate::domain::{Card, Suit};
use crate::errors::PlayerError;

pub trait Player {
    fn name(&self) -> &str;

    /// Cards currently held, in deal order.
    fn hand(&self) -> &[Card];

    /// Accept one dealt card into the hand.
    fn take_card(&mut self, card: Card);

    /// See the round's revealed trump card before bidding starts; `None` on
    /// the no-trump rounds. Automated players typically ignore this, so the
    /// default does nothing.
    fn observe_trump(&mut self, trump_card: Option<Card>) -> Result<(), PlayerError> {
        let _ = trump_card;
        Ok(())
    }

    /// Choose a bid for the round.
    ///
    /// `total_bid` is the sum of the bids placed so far; `is_last` marks the
    /// final bidder, who by house rule should not bring the total to exactly
    /// the hand size.
    fn make_bid(&mut self, is_last: bool, total_bid: u8) -> Result<u8, PlayerError>;

    /// Choose a card for the current trick and remove it from the hand.
    ///
    /// `lead_suit` is `None` exactly when `is_first` is true; `trump` is
    /// `None` on the no-trump rounds.
    fn play_card(
        &mut self,
        is_first: bool,
        lead_suit: Option<Suit>,
        trump: Option<Suit>,
    ) -> Result<Card, PlayerError>;
}
