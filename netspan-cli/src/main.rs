//! NETSPAN CLI - Command-line interface
//!
//! Commands:
//! - play: play a single engine-vs-engine game
//! - match: play a series of games between two configurations
//! - bench: time the search across depths

mod bench;
mod match_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netspan")]
#[command(about = "NETSPAN automated Network player")]
struct Cli {
    /// Seed for commands that randomize openings
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two configurations
    Match(match_cmd::MatchArgs),
    /// Benchmark search depths
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Bench(args) => bench::run(args, cli.seed),
    }
}
