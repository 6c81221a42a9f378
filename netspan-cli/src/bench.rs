//! Bench command - time the search across depths

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use netspan_core::{random_position, AlphaBetaPlayer, Color, Weights};

#[derive(Args)]
pub struct BenchArgs {
    /// Deepest search to time
    #[arg(long, default_value = "3")]
    pub max_depth: u32,

    /// Positions sampled per depth
    #[arg(long, default_value = "5")]
    pub positions: usize,

    /// Random plies played to reach each position
    #[arg(long, default_value = "8")]
    pub opening_plies: usize,
}

pub fn run(args: BenchArgs, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or(42);

    tracing::info!(
        "Benchmarking depths 1..={} over {} positions (seed {})",
        args.max_depth,
        args.positions,
        seed
    );

    println!("{:>5} {:>10} {:>14}", "depth", "positions", "avg ms/move");
    for depth in 1..=args.max_depth {
        let mut total = Duration::ZERO;
        for i in 0..args.positions {
            // Same positions at every depth, so rows are comparable
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
            let board = random_position(&mut rng, args.opening_plies / 2 * 2);
            let mut engine = AlphaBetaPlayer::from_position(Color::White, depth, Weights::default(), board);

            let start = Instant::now();
            engine.choose_move();
            total += start.elapsed();
        }

        let avg_ms = total.as_secs_f64() * 1000.0 / args.positions.max(1) as f64;
        println!("{:>5} {:>10} {:>14.2}", depth, args.positions, avg_ms);
    }

    Ok(())
}
