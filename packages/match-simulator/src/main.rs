//! Match simulator CLI - plays Texas 42 matches between automated seats.
//!
//! Prints one JSON summary per match.

mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use output::OutputWriter;
use rand::Rng;
use simulator::{MatchSummary, Simulator};
use texas42_engine::ai::{HouseBot, RandomPlayer};
use texas42_engine::RulesConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Plays Texas 42 matches between automated seats")]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// AI for all seats (shortcut for setting each seat)
    #[arg(long, conflicts_with_all = ["north", "west", "south", "east"])]
    seats: Option<AiType>,

    #[arg(long, default_value = "house")]
    north: AiType,

    #[arg(long, default_value = "house")]
    west: AiType,

    #[arg(long, default_value = "house")]
    south: AiType,

    #[arg(long, default_value = "house")]
    east: AiType,

    /// Seed of the first match; later matches add their offset. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Marks needed to win
    #[arg(long)]
    winning_marks: Option<u8>,

    /// Write summaries to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log a win tally when done
    #[arg(long)]
    show_summary: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    House,
    Random,
}

impl AiType {
    fn name(self) -> &'static str {
        match self {
            AiType::House => HouseBot::NAME,
            AiType::Random => RandomPlayer::NAME,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless asked
    let default_filter = if args.verbose {
        "debug"
    } else if args.show_summary {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seat_types = match args.seats {
        Some(all) => [all; 4],
        None => [args.north, args.west, args.south, args.east],
    };
    let mut rules = RulesConfig::from_env()?;
    if let Some(marks) = args.winning_marks {
        rules.winning_marks = marks;
        rules.validate()?;
    }

    let simulator = Simulator::new(seat_types.map(|t| t.name().to_string()), rules);
    let mut writer = OutputWriter::new(args.output.as_deref())?;
    let first_seed = args.seed.unwrap_or_else(|| rand::rng().random());

    info!(
        matches = args.matches,
        first_seed,
        seats = ?seat_types,
        winning_marks = rules.winning_marks,
        "Starting simulation"
    );

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_no in 1..=args.matches {
        let seed = first_seed.wrapping_add(u64::from(match_no - 1));
        match simulator.run_match(match_no, seed) {
            Ok(summary) => {
                if let Err(e) = writer.write_match(&summary) {
                    warn!(match_no, error = %e, "Failed to write summary");
                }
                results.push(summary);
            }
            Err(e) => {
                errors += 1;
                warn!(match_no, seed, code = %e.code(), error = %e, "Match failed");
            }
        }
    }

    if let Some(path) = writer.finish()? {
        info!(path = %path.display(), "Summaries written");
    }
    if args.show_summary {
        log_tally(&results, errors, start.elapsed());
    }
    Ok(())
}

fn log_tally(results: &[MatchSummary], errors: u32, elapsed: std::time::Duration) {
    let mut wins = [0u32; 2];
    let mut hands = 0;
    for result in results {
        if let Some(team) = result.winner {
            wins[usize::from(team - 1)] += 1;
        }
        hands += result.hands_played;
    }
    let played = results.len().max(1) as f64;
    info!(
        completed = results.len(),
        errors,
        team1_wins = wins[0],
        team2_wins = wins[1],
        avg_hands = hands as f64 / played,
        elapsed_ms = elapsed.as_millis() as u64,
        "Simulation finished"
    );
}
