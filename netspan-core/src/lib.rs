//! NETSPAN Core - Network game engine and AI
//!
//! This crate provides the core logic for NETSPAN:
//! - Board geometry (8x8 grid, goal edges, per-color valid regions)
//! - Game state, move legality and strict apply/undo
//! - Piece connectivity and winning-network detection
//! - Position evaluation with a connectivity heuristic
//! - Fixed-depth alpha-beta move search

pub mod board;
pub mod pieces;
pub mod game;
pub mod network;
pub mod eval;
pub mod ai;
pub mod config;

// Re-exports for convenient access
pub use board::{Square, DIRECTIONS, BOARD_SIZE};
pub use pieces::{Color, Piece};
pub use game::{GameState, Move, MoveError, PIECES_PER_SIDE};
pub use network::{connections, has_network, MIN_NETWORK_PIECES};
pub use eval::{evaluate, Score, Weights};
pub use ai::{play_game, AlphaBetaPlayer, Scored};
pub use config::{random_position, EngineConfig};
