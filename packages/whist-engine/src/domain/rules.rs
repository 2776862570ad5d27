//! Round schedule and bid legality.

use std::ops::RangeInclusive;

use crate::errors::DomainError;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Hand size of the no-trump rounds in the middle of the schedule.
pub const MAX_HAND_SIZE: u8 = 8;

pub fn validate_player_count(num_players: usize) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(DomainError::InvalidPlayerCount(num_players));
    }
    Ok(())
}

/// Number of rounds in a full game.
pub fn total_rounds(num_players: usize) -> u8 {
    (3 * num_players + 12) as u8
}

/// Lowest card value dealt for this table size. Smaller tables strip more
/// low cards so that the deck always holds exactly `8 * num_players` cards.
pub fn min_deal_rank(num_players: usize) -> u8 {
    (3 + (6 - num_players) * 2) as u8
}

/// Hand size for a 1-based round number.
///
/// The schedule has five phases: `num_players` rounds of 1, a ramp from 2 up
/// to 7, `num_players` rounds of 8 (played without trump), a ramp from 7
/// back down to 2, and `num_players` closing rounds of 1.
pub fn hand_size(num_players: usize, round_no: u8) -> Result<u8, DomainError> {
    validate_player_count(num_players)?;
    let n = num_players as u8;
    let total = total_rounds(num_players);
    if round_no == 0 || round_no > total {
        return Err(DomainError::RoundOutOfRange {
            round: round_no,
            num_players,
            total,
        });
    }
    let size = if round_no <= n {
        1
    } else if round_no <= n + 6 {
        round_no - n + 1
    } else if round_no <= 2 * n + 6 {
        MAX_HAND_SIZE
    } else if round_no <= 2 * n + 12 {
        2 * n + 14 - round_no
    } else {
        1
    };
    Ok(size)
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}

/// Bids a compliant player may return.
///
/// The engine itself records whatever a player bids; this helper is the
/// shared implementation of the player-side rules: bids stay within
/// `0..=hand_size`, and the last bidder may not bring the round's total bid
/// to exactly the hand size.
pub fn legal_bids(hand_size: u8, is_last: bool, total_bid: u8) -> Vec<u8> {
    let mut bids: Vec<u8> = valid_bid_range(hand_size).collect();
    if is_last {
        bids.retain(|&b| total_bid.saturating_add(b) != hand_size);
    }
    bids
}
