//! Round and trick orchestration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::domain::seats::{nth_from, prev_seat, Seat};
use crate::domain::{rules, Card, Deck, Scoreboard, Suit};
use crate::domain::{resolve_trick, round_score};
use crate::errors::{DomainError, GameError, PlayerError};
use crate::players::Player;

/// A full game of Whist for 3 to 6 players.
///
/// The game owns the players, the scoreboard, and the lead seat, which
/// rotates to each trick's winner and persists across round boundaries: the
/// winner of round N's last trick leads round N+1. Everything is strictly
/// sequential; exactly one player decision is pending at any time.
pub struct Game {
    players: Vec<Box<dyn Player>>,
    lead_seat: Seat,
    scoreboard: Scoreboard,
    discard: Vec<Card>,
    current_bids: Vec<u8>,
    current_tricks_won: Vec<u8>,
    rng: StdRng,
}

impl Game {
    /// `seed` makes the deal order deterministic; `None` uses OS entropy.
    pub fn new(players: Vec<Box<dyn Player>>, seed: Option<u64>) -> Result<Self, DomainError> {
        rules::validate_player_count(players.len())?;
        let num_players = players.len();
        let mut scoreboard = Scoreboard::new();
        for seat in 0..num_players as Seat {
            scoreboard.add_player(seat);
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            players,
            lead_seat: 0,
            scoreboard,
            discard: Vec::new(),
            current_bids: vec![0; num_players],
            current_tricks_won: vec![0; num_players],
            rng,
        })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn total_rounds(&self) -> u8 {
        rules::total_rounds(self.num_players())
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn player_name(&self, seat: Seat) -> Option<&str> {
        self.players.get(seat as usize).map(|p| p.name())
    }

    /// Play every round of the schedule.
    pub fn play(&mut self) -> Result<(), GameError> {
        for round_no in 1..=self.total_rounds() {
            self.play_round(round_no)?;
        }
        Ok(())
    }

    /// Play one full round: deal, reveal trump (unless hand size 8) and show
    /// it to every seat, collect bids, play `hand_size` tricks, and commit
    /// scores.
    pub fn play_round(&mut self, round_no: u8) -> Result<(), GameError> {
        let n = self.num_players();
        self.current_bids = vec![0; n];
        self.current_tricks_won = vec![0; n];
        self.discard.clear();

        let hand_size = rules::hand_size(n, round_no)?;
        info!(round_no, hand_size, "round started");

        let mut deck = Deck::new(n, &mut self.rng)?;
        self.deal(&mut deck, hand_size)?;
        let trump = if hand_size < rules::MAX_HAND_SIZE {
            let card = deck.reveal_trump()?;
            info!(round_no, trump_card = %card, "trump revealed");
            Some(card.suit)
        } else {
            info!(round_no, "no-trump round");
            None
        };
        for seat in 0..n as Seat {
            self.players[seat as usize]
                .observe_trump(deck.trump_card())
                .map_err(|source| GameError::Player { seat, source })?;
        }

        self.collect_bids(hand_size)?;
        for _ in 0..hand_size {
            let winner = self.play_trick(trump)?;
            self.current_tricks_won[winner as usize] += 1;
        }

        for seat in 0..n {
            let bid = self.current_bids[seat];
            let tricks_won = self.current_tricks_won[seat];
            let score = round_score(bid, tricks_won);
            self.scoreboard
                .update_score(seat as Seat, round_no, bid, tricks_won, score);
            debug!(round_no, seat, bid, tricks_won, score, "round score committed");
        }
        Ok(())
    }

    /// Deal `hand_size` cards to every player, one at a time rotating from
    /// the current lead seat.
    fn deal(&mut self, deck: &mut Deck, hand_size: u8) -> Result<(), GameError> {
        let n = self.num_players();
        for _ in 0..hand_size {
            for j in 0..n as u8 {
                let seat = nth_from(self.lead_seat, j, n);
                let card = deck.draw().map_err(GameError::Domain)?;
                self.players[seat as usize].take_card(card);
            }
        }
        Ok(())
    }

    /// Collect one bid per player in lead-rotated order. The seat before the
    /// lead bids last with `is_last = true`; everyone sees the running total
    /// of the bids placed so far.
    fn collect_bids(&mut self, hand_size: u8) -> Result<(), GameError> {
        let n = self.num_players();
        let mut total_bid = 0u8;
        for i in 0..(n - 1) as u8 {
            let seat = nth_from(self.lead_seat, i, n);
            let bid = self.bid_from(seat, false, total_bid)?;
            self.current_bids[seat as usize] = bid;
            // Players are free to return wild bids; the total must not trap.
            total_bid = total_bid.saturating_add(bid);
        }
        let last_seat = prev_seat(self.lead_seat, n);
        let bid = self.bid_from(last_seat, true, total_bid)?;
        self.current_bids[last_seat as usize] = bid;
        debug!(
            hand_size,
            total_bid = total_bid.saturating_add(bid),
            "bidding complete"
        );
        Ok(())
    }

    fn bid_from(&mut self, seat: Seat, is_last: bool, total_bid: u8) -> Result<u8, GameError> {
        let bid = self.players[seat as usize]
            .make_bid(is_last, total_bid)
            .map_err(|source| GameError::Player { seat, source })?;
        debug!(seat, bid, is_last, "bid recorded");
        Ok(bid)
    }

    /// Play one trick: the lead seat plays first and fixes the lead suit,
    /// the rest follow in rotation, and the winner becomes the new lead.
    fn play_trick(&mut self, trump: Option<Suit>) -> Result<Seat, GameError> {
        let n = self.num_players();
        let mut plays: Vec<(Seat, Card)> = Vec::with_capacity(n);

        let lead_seat = self.lead_seat;
        let lead_card = self.play_from(lead_seat, true, None, trump)?;
        let lead_suit = lead_card.suit;
        plays.push((lead_seat, lead_card));

        for i in 1..n as u8 {
            let seat = nth_from(lead_seat, i, n);
            let card = self.play_from(seat, false, Some(lead_suit), trump)?;
            plays.push((seat, card));
        }

        let winner = resolve_trick(&plays, trump).map_err(GameError::Domain)?;
        debug!(winner, ?trump, "trick resolved");
        self.lead_seat = winner;
        self.discard.extend(plays.into_iter().map(|(_, card)| card));
        Ok(winner)
    }

    fn play_from(
        &mut self,
        seat: Seat,
        is_first: bool,
        lead_suit: Option<Suit>,
        trump: Option<Suit>,
    ) -> Result<Card, GameError> {
        self.players[seat as usize]
            .play_card(is_first, lead_suit, trump)
            .map_err(|source: PlayerError| GameError::Player { seat, source })
    }
}
