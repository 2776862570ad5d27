//! Trick resolution and play legality.

use crate::domain::cards::{card_beats, hand_has_suit, Card, Suit};
use crate::domain::seats::Seat;
use crate::errors::DomainError;

/// Resolve a completed trick: the first play fixes the lead suit, the
/// highest trump wins if any trump was played, otherwise the highest
/// lead-suit card wins (the lead itself at worst).
///
/// Cards within a trick are unique by deck construction, so rank ties cannot
/// occur; the comparison is strict, so ties would go to the earlier play.
pub fn resolve_trick(plays: &[(Seat, Card)], trump: Option<Suit>) -> Result<Seat, DomainError> {
    let Some(&(lead_seat, lead_card)) = plays.first() else {
        return Err(DomainError::EmptyTrick);
    };
    let lead = lead_card.suit;
    let mut best = (lead_seat, lead_card);
    for &(seat, card) in &plays[1..] {
        if card_beats(card, best.1, lead, trump) {
            best = (seat, card);
        }
    }
    Ok(best.0)
}

/// Cards a compliant player may play from `hand`.
///
/// Leading (`lead_suit` is `None`) allows any card. Following requires the
/// lead suit when held; a player void in the lead suit must trump when the
/// round has a trump suit and they hold it; otherwise anything goes. As with
/// bids, enforcement lives in the `Player` implementations, not the engine.
pub fn legal_plays(hand: &[Card], lead_suit: Option<Suit>, trump: Option<Suit>) -> Vec<Card> {
    if let Some(lead) = lead_suit {
        if hand_has_suit(hand, lead) {
            return hand.iter().copied().filter(|c| c.suit == lead).collect();
        }
        if let Some(t) = trump {
            if hand_has_suit(hand, t) {
                return hand.iter().copied().filter(|c| c.suit == t).collect();
            }
        }
    }
    hand.to_vec()
}
