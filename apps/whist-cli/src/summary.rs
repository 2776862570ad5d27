//! Scoreboard printing and the JSON game summary.

use serde::Serialize;
use whist_engine::domain::Seat;
use whist_engine::Game;

#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub players: Vec<SeatSummary>,
}

#[derive(Debug, Serialize)]
pub struct SeatSummary {
    pub seat: Seat,
    pub name: String,
    pub total_score: i16,
    pub rounds: Vec<RoundRow>,
}

#[derive(Debug, Serialize)]
pub struct RoundRow {
    pub round: u8,
    pub bid: u8,
    pub tricks_won: u8,
    pub score: i16,
    pub cumulative_score: i16,
}

impl GameSummary {
    pub fn from_game(game: &Game) -> Self {
        let players = (0..game.num_players() as Seat)
            .map(|seat| SeatSummary {
                seat,
                name: game.player_name(seat).unwrap_or("?").to_string(),
                total_score: game.scoreboard().total_score(seat).unwrap_or(0),
                rounds: game
                    .scoreboard()
                    .rounds(seat)
                    .map(|(round, d)| RoundRow {
                        round,
                        bid: d.bid,
                        tricks_won: d.tricks_won,
                        score: d.score,
                        cumulative_score: d.cumulative_score,
                    })
                    .collect(),
            })
            .collect();
        Self { players }
    }
}

/// One line per seat with the round's bid, tricks, and running total.
pub fn print_round(game: &Game, round_no: u8) {
    println!("--- Round {round_no} ---");
    for seat in 0..game.num_players() as Seat {
        let name = game.player_name(seat).unwrap_or("?");
        match game.scoreboard().round_detail(seat, round_no) {
            Some(d) => println!(
                "{name}: bid {}, won {}, score {:+}, total {}",
                d.bid, d.tricks_won, d.score, d.cumulative_score
            ),
            None => println!("{name}: (no result)"),
        }
    }
    println!();
}

/// Final standings, best first.
pub fn print_final(game: &Game) {
    let mut standings: Vec<(Seat, i16)> = (0..game.num_players() as Seat)
        .map(|seat| (seat, game.scoreboard().total_score(seat).unwrap_or(0)))
        .collect();
    standings.sort_by_key(|&(_, total)| std::cmp::Reverse(total));

    println!("=== Final standings ===");
    for (place, (seat, total)) in standings.iter().enumerate() {
        let name = game.player_name(*seat).unwrap_or("?");
        println!("{}. {name}: {total}", place + 1);
    }
    if let Some((seat, _)) = standings.first() {
        let name = game.player_name(*seat).unwrap_or("?");
        println!("{name} wins!");
    }
}
