//! Per-seat score accumulation across rounds.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::seats::Seat;

/// One round's result for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundDetail {
    pub bid: u8,
    pub tricks_won: u8,
    pub score: i16,
    pub cumulative_score: i16,
}

#[derive(Debug, Clone, Default, Serialize)]
struct SeatRecord {
    total_score: i16,
    rounds: BTreeMap<u8, RoundDetail>,
}

/// Running record of bids, tricks won, and scores for every seat.
///
/// Entries grow monotonically: rounds are only ever appended, and the
/// cumulative total is bumped as each round's score is committed. Queries on
/// seats that were never registered return `None` rather than an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scoreboard {
    entries: BTreeMap<Seat, SeatRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, seat: Seat) {
        self.entries.entry(seat).or_default();
    }

    /// Commit one round's result for `seat`, updating the cumulative total.
    /// Unknown seats are registered on the fly.
    pub fn update_score(
        &mut self,
        seat: Seat,
        round_no: u8,
        bid: u8,
        tricks_won: u8,
        round_score: i16,
    ) {
        let record = self.entries.entry(seat).or_default();
        let cumulative = record.total_score + round_score;
        record.rounds.insert(
            round_no,
            RoundDetail {
                bid,
                tricks_won,
                score: round_score,
                cumulative_score: cumulative,
            },
        );
        record.total_score = cumulative;
    }

    pub fn total_score(&self, seat: Seat) -> Option<i16> {
        self.entries.get(&seat).map(|r| r.total_score)
    }

    pub fn round_detail(&self, seat: Seat, round_no: u8) -> Option<&RoundDetail> {
        self.entries.get(&seat).and_then(|r| r.rounds.get(&round_no))
    }

    /// Round results for `seat` in round order; empty for unknown seats.
    pub fn rounds(&self, seat: Seat) -> impl Iterator<Item = (u8, &RoundDetail)> + '_ {
        self.entries
            .get(&seat)
            .into_iter()
            .flat_map(|r| r.rounds.iter().map(|(no, detail)| (*no, detail)))
    }
}
