//! Play command - a single engine-vs-engine game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use netspan_core::{play_game, Color, EngineConfig, GameState, Square, BOARD_SIZE};

#[derive(Args)]
pub struct PlayArgs {
    /// Black engine config JSON file (built-in defaults when omitted)
    #[arg(long, value_name = "FILE")]
    pub black: Option<PathBuf>,

    /// White engine config JSON file
    #[arg(long, value_name = "FILE")]
    pub white: Option<PathBuf>,

    /// Search depth override for both engines
    #[arg(long)]
    pub depth: Option<u32>,

    /// Maximum plies before the game is called unfinished
    #[arg(long, default_value = "80")]
    pub max_plies: usize,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let black_cfg = load_or_default(&args.black, args.depth)?;
    let white_cfg = load_or_default(&args.white, args.depth)?;

    tracing::info!(
        "Playing {} (Black, depth {}) vs {} (White, depth {})",
        black_cfg.name,
        black_cfg.depth,
        white_cfg.name,
        white_cfg.depth
    );

    let mut black = black_cfg.player(Color::Black);
    let mut white = white_cfg.player(Color::White);
    let (winner, history) = play_game(&mut black, &mut white, args.max_plies);

    for (i, mv) in history.iter().enumerate() {
        println!("{:3}. {mv}", i + 1);
    }
    println!("{}", render_board(black.board()));

    match winner {
        Some(Color::Black) => println!("Black ({}) wins after {} plies", black_cfg.name, history.len()),
        Some(Color::White) => println!("White ({}) wins after {} plies", white_cfg.name, history.len()),
        None => println!("Unfinished after {} plies", history.len()),
    }

    Ok(())
}

fn load_or_default(path: &Option<PathBuf>, depth: Option<u32>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load engine config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = depth {
        config.depth = depth;
    }
    Ok(config)
}

/// ASCII rendering: `B`/`W` pieces, `.` empty, `#` dead corners
fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("  0 1 2 3 4 5 6 7\n");
    for y in 0..BOARD_SIZE {
        out.push_str(&format!("{y} "));
        for x in 0..BOARD_SIZE {
            let sq = Square::new(x, y);
            let cell = match state.color_at(sq) {
                Some(Color::Black) => 'B',
                Some(Color::White) => 'W',
                None if sq.is_corner() => '#',
                None => '.',
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
