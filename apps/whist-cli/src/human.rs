//! Interactive console player.
//!
//! All legality rules live here, in the prompt/retry loops: the orchestrator
//! accepts whatever this player returns, so a value only leaves this module
//! once it passes the bid-range, "no exact total", follow-suit, and
//! trump-obligation checks.

use std::io::{self, BufRead, BufReader, Write};

use whist_engine::domain::{hand_has_suit, legal_plays, Card, Suit};
use whist_engine::{Player, PlayerError};

pub struct HumanPlayer<R = BufReader<io::Stdin>, W = io::Stdout> {
    name: String,
    hand: Vec<Card>,
    input: R,
    output: W,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_io(name, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Prompt against arbitrary streams; tests drive this with in-memory
    /// buffers.
    pub fn from_io(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(PlayerError::InvalidInput("input stream closed".into()));
        }
        Ok(line.trim().to_string())
    }

    fn show_hand(&mut self) -> Result<(), PlayerError> {
        writeln!(self.output, "Your cards are:")?;
        for (i, card) in self.hand.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, card)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn observe_trump(&mut self, trump_card: Option<Card>) -> Result<(), PlayerError> {
        match trump_card {
            Some(card) => writeln!(self.output, "The trump card is the {card}.")?,
            None => writeln!(self.output, "This round is played without a trump.")?,
        }
        Ok(())
    }

    fn make_bid(&mut self, is_last: bool, total_bid: u8) -> Result<u8, PlayerError> {
        self.show_hand()?;
        let hand_size = self.hand.len() as u8;
        if is_last {
            writeln!(self.output, "You are the last player to bid.")?;
            if total_bid > hand_size {
                writeln!(
                    self.output,
                    "The round is overbid; you can bid whatever you'd like."
                )?;
            } else {
                writeln!(
                    self.output,
                    "The round is underbid; you cannot bid {}.",
                    hand_size - total_bid
                )?;
            }
        }
        loop {
            write!(self.output, "{}, make a bid: ", self.name)?;
            self.output.flush()?;
            let line = self.read_line()?;
            let Ok(bid) = line.parse::<u8>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };
            if bid > hand_size {
                writeln!(
                    self.output,
                    "Invalid bid. You must bid a number between 0 and {hand_size}."
                )?;
            } else if is_last && total_bid.saturating_add(bid) == hand_size {
                writeln!(
                    self.output,
                    "You cannot bid {bid} as it would make the total bids equal to the hand size."
                )?;
            } else {
                return Ok(bid);
            }
        }
    }

    fn play_card(
        &mut self,
        _is_first: bool,
        lead_suit: Option<Suit>,
        trump: Option<Suit>,
    ) -> Result<Card, PlayerError> {
        self.show_hand()?;
        let hand_len = self.hand.len();
        loop {
            write!(
                self.output,
                "{}, select a card to play by entering its number: ",
                self.name
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            let Ok(number) = line.parse::<usize>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };
            if number < 1 || number > hand_len {
                writeln!(
                    self.output,
                    "Invalid card. Please select a number between 1 and {hand_len}."
                )?;
                continue;
            }

            let selected = self.hand[number - 1];
            let legal = legal_plays(&self.hand, lead_suit, trump);
            if !legal.contains(&selected) {
                if let Some(lead) = lead_suit {
                    if hand_has_suit(&self.hand, lead) {
                        writeln!(
                            self.output,
                            "You must play a card of the lead suit, {lead}."
                        )?;
                    } else if let Some(t) = trump {
                        writeln!(
                            self.output,
                            "You don't have the lead suit but hold a trump; you must play a {t}."
                        )?;
                    }
                }
                continue;
            }

            return Ok(self.hand.remove(number - 1));
        }
    }
}
