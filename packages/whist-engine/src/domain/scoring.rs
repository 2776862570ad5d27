//! Round score calculation.

/// Score for one player's round: an exact bid earns `5 + bid`, a miss costs
/// the size of the miss. Defined for all non-negative inputs.
pub fn round_score(bid: u8, tricks_won: u8) -> i16 {
    if bid == tricks_won {
        5 + bid as i16
    } else {
        -((bid as i16 - tricks_won as i16).abs())
    }
}
