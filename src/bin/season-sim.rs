//! Season Simulator CLI Tool
//!
//! Command-line tool for exercising the rating ledger end to end: it
//! registers a field of players, replays a deterministic rotation of
//! contest results, and prints the resulting standings from the ledger's
//! read-only views.
//!
//! Usage:
//!   cargo run --bin season-sim -- --players 6 --contests 10
//!   cargo run --bin season-sim -- --players 4 --contests 3 --base-k 16

use anyhow::Result;
use clap::Parser;
use podium::types::ContestResult;
use podium::{RatingConfig, RatingLedger};

#[derive(Parser)]
#[command(name = "season-sim")]
#[command(about = "Simulate a season of multi-participant contests against the rating ledger")]
struct Cli {
    /// Number of players to register
    #[arg(short, long, default_value = "6")]
    players: usize,

    /// Number of contests to simulate
    #[arg(short, long, default_value = "10")]
    contests: usize,

    /// Total K distributed across each contest's pairings
    #[arg(long, default_value = "32")]
    base_k: i32,
}

/// Finishing order for one round: a rotation of the field, so every
/// player cycles through every position over a full season
fn round_results(names: &[String], round: usize) -> Vec<ContestResult> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let position = ((index + round) % names.len()) as i32 + 1;
            ContestResult::new(name.clone(), position)
        })
        .collect()
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = RatingConfig {
        base_k: cli.base_k,
        ..RatingConfig::default()
    };
    let mut ledger = RatingLedger::with_config(config)?;

    let names: Vec<String> = (1..=cli.players).map(|i| format!("player{}", i)).collect();
    for name in &names {
        ledger.add_player(name)?;
    }

    for round in 0..cli.contests {
        let deltas = ledger.record_contest(round_results(&names, round))?;
        for delta in &deltas {
            println!(
                "round {:>3}  {:<12} pos {:>2}  {:>+4}  -> {}",
                round + 1,
                delta.player,
                delta.position,
                delta.delta,
                delta.new_rating
            );
        }
    }

    println!();
    println!("Final standings after {} contests:", ledger.contest_count());

    let mut players = ledger.list_players();
    players.sort_by(|a, b| b.rating.cmp(&a.rating));

    for (rank, player) in players.iter().enumerate() {
        let average = player
            .stats
            .average_finish()
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>2}. {:<12} rating {:>5}  peak {:>5}  wins {:>2}/{:<2}  avg finish {}",
            rank + 1,
            player.name,
            player.rating,
            player.stats.peak_rating,
            player.stats.contests_won,
            player.stats.contests_played,
            average
        );
    }

    Ok(())
}
