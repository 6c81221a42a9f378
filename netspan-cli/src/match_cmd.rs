//! Match command - play a series of games between two engine configurations
//!
//! Orchestration in run(), phases in load_configs() / play_match() /
//! report_results(), single games below that.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use netspan_core::{play_game, random_position, AlphaBetaPlayer, Color, EngineConfig, Move};

// ============================================================================
// ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// First engine config JSON file (built-in defaults when omitted)
    #[arg(long, value_name = "FILE")]
    pub first: Option<PathBuf>,

    /// Second engine config JSON file
    #[arg(long, value_name = "FILE")]
    pub second: Option<PathBuf>,

    /// Number of games to play (colors alternate each game)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Search depth override for both engines
    #[arg(long)]
    pub depth: Option<u32>,

    /// Random opening plies per game (rounded down to full move pairs)
    #[arg(long, default_value = "6")]
    pub opening_plies: usize,

    /// Maximum plies per game
    #[arg(long, default_value = "80")]
    pub max_plies: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    black: String,
    white: String,
    winner: Option<Color>,
    winner_name: Option<String>,
    plies: usize,
    moves: Vec<Move>,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    games: Vec<GameRecord>,
    first_wins: usize,
    second_wins: usize,
    unfinished: usize,
    avg_plies: f32,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or(42);
    let (first, second) = load_configs(&args)?;

    tracing::info!(
        "Starting match: {} vs {} ({} games, seed {})",
        first.name,
        second.name,
        args.games,
        seed
    );

    let results = play_match(&first, &second, &args, seed);

    report_results(&results, &first, &second, &args)?;

    Ok(())
}

// ============================================================================
// PHASES
// ============================================================================

fn load_configs(args: &MatchArgs) -> Result<(EngineConfig, EngineConfig)> {
    let mut first = match &args.first {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load first config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let mut second = match &args.second {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load second config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        first.depth = depth;
        second.depth = depth;
    }
    Ok((first, second))
}

/// Games are independent: each gets its own engines, boards and RNG, so
/// they distribute cleanly across threads.
fn play_match(first: &EngineConfig, second: &EngineConfig, args: &MatchArgs, seed: u64) -> MatchResults {
    let progress = ProgressBar::new(args.games as u64);

    let games: Vec<GameRecord> = (0..args.games)
        .into_par_iter()
        .map(|game_number| {
            let record = play_single_game(game_number, first, second, args, seed);
            progress.inc(1);
            record
        })
        .collect();

    progress.finish_and_clear();
    summarize(games)
}

fn play_single_game(
    game_number: usize,
    first: &EngineConfig,
    second: &EngineConfig,
    args: &MatchArgs,
    seed: u64,
) -> GameRecord {
    // Colors alternate: the first config takes Black in even games
    let (black_cfg, white_cfg) = if game_number % 2 == 0 {
        (first, second)
    } else {
        (second, first)
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(game_number as u64));
    let opening = random_position(&mut rng, args.opening_plies / 2 * 2);

    let mut black =
        AlphaBetaPlayer::from_position(Color::Black, black_cfg.depth, black_cfg.weights, opening.clone());
    let mut white =
        AlphaBetaPlayer::from_position(Color::White, white_cfg.depth, white_cfg.weights, opening);

    let (winner, moves) = play_game(&mut black, &mut white, args.max_plies);

    GameRecord {
        game_number,
        black: black_cfg.name.clone(),
        white: white_cfg.name.clone(),
        winner,
        winner_name: winner.map(|color| match color {
            Color::Black => black_cfg.name.clone(),
            Color::White => white_cfg.name.clone(),
        }),
        plies: moves.len(),
        moves,
    }
}

fn summarize(games: Vec<GameRecord>) -> MatchResults {
    let mut first_wins = 0;
    let mut second_wins = 0;
    let mut unfinished = 0;

    for record in &games {
        // Config names may repeat, so attribute wins by color and parity
        let first_played_black = record.game_number % 2 == 0;
        match record.winner {
            None => unfinished += 1,
            Some(color) => {
                let black_won = color == Color::Black;
                if black_won == first_played_black {
                    first_wins += 1;
                } else {
                    second_wins += 1;
                }
            }
        }
    }

    let total_plies: usize = games.iter().map(|g| g.plies).sum();
    let avg_plies = if games.is_empty() {
        0.0
    } else {
        total_plies as f32 / games.len() as f32
    };

    MatchResults {
        games,
        first_wins,
        second_wins,
        unfinished,
        avg_plies,
    }
}

fn report_results(
    results: &MatchResults,
    first: &EngineConfig,
    second: &EngineConfig,
    args: &MatchArgs,
) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Match: {} vs {}", first.name, second.name);
    println!("  games:      {}", results.games.len());
    println!("  {:10} {} wins", first.name, results.first_wins);
    println!("  {:10} {} wins", second.name, results.second_wins);
    println!("  unfinished: {}", results.unfinished);
    println!("  avg plies:  {:.1}", results.avg_plies);

    Ok(())
}
