//! Engine configuration and random position generation

use crate::ai::AlphaBetaPlayer;
use crate::eval::Weights;
use crate::game::GameState;
use crate::pieces::Color;
use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named engine setup: search depth plus heuristic weights
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    pub name: String,
    pub depth: u32,
    pub weights: Weights,
}

impl EngineConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config: {}", path.display()))?;
        anyhow::ensure!(
            config.depth >= 1,
            "engine config {:?} needs a search depth of at least 1",
            config.name
        );
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write engine config: {}", path.display()))?;
        Ok(())
    }

    /// Build an engine of the given color from this configuration
    pub fn player(&self, color: Color) -> AlphaBetaPlayer {
        AlphaBetaPlayer::with_weights(color, self.depth, self.weights)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            depth: 3,
            weights: Weights::default(),
        }
    }
}

/// Play `plies` uniformly random legal moves from an empty board, skipping
/// any move that would complete a network, so the returned position is
/// still live. Used by benchmarks and property tests; pass an even `plies`
/// count to leave White on move.
pub fn random_position<R: Rng>(rng: &mut R, plies: usize) -> GameState {
    let mut state = GameState::new();
    let mut to_move = Color::White;

    for _ in 0..plies {
        let mut candidates = state.legal_moves(to_move);
        let mut committed = false;
        while !candidates.is_empty() {
            let mv = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            state.apply(mv);
            if state.winner_after(to_move).is_none() {
                committed = true;
                break;
            }
            state.undo(mv);
        }
        if !committed {
            break;
        }
        to_move = to_move.opponent();
    }

    state
}
