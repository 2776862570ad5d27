//! Console Whist: interactive games at the terminal and seeded batch
//! simulation for automated seats.

mod human;
mod summary;

use clap::Parser;
use tracing::info;
use whist_engine::{Game, Player, RandomPlayer};

use crate::human::HumanPlayer;
use crate::summary::GameSummary;

#[derive(Parser)]
#[command(name = "whist")]
#[command(about = "Trick-taking Whist for 3-6 players")]
struct Args {
    /// Seats at the table (3-6)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Names for the human seats; remaining seats are filled with bots.
    /// With no names the whole table is automated.
    names: Vec<String>,

    /// Run every seat as a bot without prompting
    #[arg(long, conflicts_with = "names")]
    auto: bool,

    /// Number of games to simulate (automated tables only)
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Deal seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary per game instead of the standings table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.names.len() > args.players {
        return Err(format!(
            "{} names given for a table of {}",
            args.names.len(),
            args.players
        )
        .into());
    }

    let automated = args.auto || args.names.is_empty();
    if !automated && args.games != 1 {
        return Err("--games needs a fully automated table (--auto)".into());
    }

    for game_no in 1..=if automated { args.games } else { 1 } {
        let seed = args.seed.map(|s| s.wrapping_add(game_no as u64 - 1));
        let mut game = Game::new(build_seats(args, seed), seed)?;
        info!(game_no, players = game.num_players(), "game starting");

        if automated {
            game.play()?;
        } else {
            // Round by round so the table sees standings between deals.
            for round_no in 1..=game.total_rounds() {
                game.play_round(round_no)?;
                summary::print_round(&game, round_no);
            }
        }

        if args.json {
            println!("{}", serde_json::to_string(&GameSummary::from_game(&game))?);
        } else {
            summary::print_final(&game);
        }
    }
    Ok(())
}

/// Humans take the first seats in the order named; bots fill the rest with
/// seeds derived from the game seed so a seeded run replays exactly.
fn build_seats(args: &Args, seed: Option<u64>) -> Vec<Box<dyn Player>> {
    let mut seats: Vec<Box<dyn Player>> = Vec::with_capacity(args.players);
    if !args.auto {
        for name in &args.names {
            seats.push(Box::new(HumanPlayer::new(name.clone())));
        }
    }
    for i in seats.len()..args.players {
        let bot_seed = seed.map(|s| s.wrapping_mul(31).wrapping_add(i as u64 + 1));
        seats.push(Box::new(RandomPlayer::new(format!("Bot {}", i + 1), bot_seed)));
    }
    seats
}
