//! Fixed-depth alpha-beta move search

use crate::eval::{evaluate, Score, Weights};
use crate::game::{GameState, Move};
use crate::pieces::Color;

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// A candidate move paired with the score search assigned to it.
///
/// The move is absent only when the position was already decided before any
/// candidate could be examined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub mv: Option<Move>,
    pub score: Score,
}

// ============================================================================
// ALPHA-BETA PLAYER
// ============================================================================

/// An automatic Network player: owns its board, tracks both colors' moves,
/// and selects its own with a fixed-depth alpha-beta search evaluated from
/// its own color's perspective.
pub struct AlphaBetaPlayer {
    color: Color,
    depth: u32,
    weights: Weights,
    board: GameState,
}

impl AlphaBetaPlayer {
    pub fn new(color: Color, depth: u32) -> Self {
        Self::with_weights(color, depth, Weights::default())
    }

    pub fn with_weights(color: Color, depth: u32, weights: Weights) -> Self {
        Self::from_position(color, depth, weights, GameState::new())
    }

    /// Start from an arbitrary position (openings, problem setups)
    pub fn from_position(color: Color, depth: u32, weights: Weights, board: GameState) -> Self {
        assert!(depth >= 1, "search depth must be at least one ply");
        Self {
            color,
            depth,
            weights,
            board,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn board(&self) -> &GameState {
        &self.board
    }

    /// Select a move, record it on the internal board and return it
    pub fn choose_move(&mut self) -> Move {
        let picked = self.select();
        let mv = match picked.mv {
            Some(mv) => mv,
            // The position is already decided; commit the first legal move
            None => self
                .board
                .legal_moves(self.color)
                .first()
                .copied()
                .expect("no legal moves available"),
        };
        self.board.apply(mv);
        mv
    }

    /// Search at the configured depth without committing the move
    pub fn select(&mut self) -> Scored {
        self.search(self.color, self.depth, 0, Score::MIN, Score::MAX)
    }

    /// Record a legal opponent move and return true; an illegal move is
    /// rejected without touching the board
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.intake(mv, self.color.opponent())
    }

    /// Record a legal move for this player's own color (problem setups)
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.intake(mv, self.color)
    }

    fn intake(&mut self, mv: Move, expected: Color) -> bool {
        if mv.color() != expected || !self.board.is_legal(mv) {
            return false;
        }
        self.board.apply(mv);
        true
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    /// Alpha-beta search for the color to move. `ply` is the distance from
    /// the root; terminal scores carry it so nearer wins dominate.
    ///
    /// Every `apply` below is paired with an `undo` on the same path, so the
    /// board leaves this function exactly as it entered.
    fn search(&mut self, to_move: Color, depth: u32, ply: u32, mut alpha: Score, mut beta: Score) -> Scored {
        // A decided game ends the search no matter whose turn it is
        if self.board.has_network(self.color) {
            return Scored {
                mv: None,
                score: Score::Win(ply),
            };
        }
        if self.board.has_network(self.color.opponent()) {
            return Scored {
                mv: None,
                score: Score::Loss(ply),
            };
        }

        let moves = self.board.legal_moves(to_move);
        assert!(!moves.is_empty(), "search entered a position with no legal moves");

        let maximizing = to_move == self.color;
        let mut best = Scored {
            mv: Some(moves[0]),
            score: if maximizing { alpha } else { beta },
        };

        if depth == 1 {
            // Frontier: one ply of static lookahead, always scored from this
            // player's own perspective regardless of whose move it is
            for mv in moves {
                self.board.apply(mv);
                let score = evaluate(&self.board, self.color, &self.weights).at_ply(ply + 1);
                self.board.undo(mv);
                if (maximizing && score > best.score) || (!maximizing && score < best.score) {
                    best = Scored { mv: Some(mv), score };
                }
            }
        } else {
            for mv in moves {
                self.board.apply(mv);
                let reply = self.search(to_move.opponent(), depth - 1, ply + 1, alpha, beta);
                self.board.undo(mv);
                if maximizing && reply.score > best.score {
                    best = Scored {
                        mv: Some(mv),
                        score: reply.score,
                    };
                    alpha = reply.score;
                } else if !maximizing && reply.score < best.score {
                    best = Scored {
                        mv: Some(mv),
                        score: reply.score,
                    };
                    beta = reply.score;
                }
                if alpha >= beta {
                    return best;
                }
            }
        }

        best
    }
}

// ============================================================================
// GAME LOOP
// ============================================================================

/// Play a complete game between two engines. White moves first; each
/// committed move is relayed to the other engine. Returns the winner, if
/// the game finished within `max_plies`, and the move history.
pub fn play_game(
    black: &mut AlphaBetaPlayer,
    white: &mut AlphaBetaPlayer,
    max_plies: usize,
) -> (Option<Color>, Vec<Move>) {
    debug_assert_eq!(black.color(), Color::Black);
    debug_assert_eq!(white.color(), Color::White);

    let mut history = Vec::new();
    let mut to_move = Color::White;

    for _ in 0..max_plies {
        let (mover, other) = match to_move {
            Color::White => (&mut *white, &mut *black),
            Color::Black => (&mut *black, &mut *white),
        };

        let mv = mover.choose_move();
        let accepted = other.opponent_move(mv);
        assert!(accepted, "engines disagree on the legality of {mv}");
        history.push(mv);

        if let Some(winner) = mover.board().winner_after(to_move) {
            return (Some(winner), history);
        }
        to_move = to_move.opponent();
    }

    (None, history)
}
