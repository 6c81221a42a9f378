//! Position evaluation and the search score type

use crate::game::GameState;
use crate::network::connections;
use crate::pieces::Color;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// SCORE
// ============================================================================

/// Search score: a decided game or a heuristic estimate.
///
/// `Win`/`Loss` carry the number of plies from the search root at which the
/// network was found, so a faster win outranks a slower one and a slower
/// loss outranks a faster one without any sentinel arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    Loss(u32),
    Heuristic(i32),
    Win(u32),
}

impl Score {
    /// Worst possible score: a loss already on the board
    pub const MIN: Score = Score::Loss(0);
    /// Best possible score: a win already on the board
    pub const MAX: Score = Score::Win(0);

    /// Stamp a terminal score with its distance from the search root
    pub fn at_ply(self, ply: u32) -> Score {
        match self {
            Score::Win(_) => Score::Win(ply),
            Score::Loss(_) => Score::Loss(ply),
            heuristic => heuristic,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Score::Heuristic(_))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        use Score::*;
        match (self, other) {
            (Win(a), Win(b)) => b.cmp(a),   // sooner win is better
            (Loss(a), Loss(b)) => a.cmp(b), // later loss is better
            (Heuristic(a), Heuristic(b)) => a.cmp(b),
            (Win(_), _) | (_, Loss(_)) => Ordering::Greater,
            (Loss(_), _) | (_, Win(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// HEURISTIC WEIGHTS
// ============================================================================

/// Heuristic weights for position evaluation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Weights {
    /// Per pairwise line-of-sight connection
    pub link: i32,
    /// Per goal edge holding at least one piece
    pub goal: i32,
    /// Per piece crowding a goal edge beyond the second
    pub goal_crowding: i32,
    /// Per piece, scaled by closeness to the board center
    pub center: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            link: 6,
            goal: 15,
            goal_crowding: 8,
            center: 2,
        }
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Evaluate a position from a fixed perspective.
///
/// A complete network decides the score outright; otherwise the heuristic
/// sums connectivity, goal-edge presence and centralization, own side minus
/// opponent.
pub fn evaluate(state: &GameState, perspective: Color, weights: &Weights) -> Score {
    if state.has_network(perspective) {
        return Score::MAX;
    }
    if state.has_network(perspective.opponent()) {
        return Score::MIN;
    }

    let total = side_score(state, perspective, weights) - side_score(state, perspective.opponent(), weights);
    Score::Heuristic(total)
}

fn side_score(state: &GameState, color: Color, weights: &Weights) -> i32 {
    let mut score = 0;
    let mut first_goal = 0;
    let mut second_goal = 0;

    for piece in state.pieces(color) {
        score += weights.link * connections(state, &piece).len() as i32;
        score += weights.center * i32::from(3 - piece.square.center_distance());
        if color.in_first_goal(piece.square) {
            first_goal += 1;
        } else if color.in_second_goal(piece.square) {
            second_goal += 1;
        }
    }

    for goal_count in [first_goal, second_goal] {
        if goal_count > 0 {
            score += weights.goal;
        }
        if goal_count > 2 {
            score -= weights.goal_crowding * (goal_count - 2);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y)
    }

    #[test]
    fn test_score_total_order() {
        assert!(Score::Win(3) > Score::Heuristic(i32::MAX));
        assert!(Score::Heuristic(i32::MIN) > Score::Loss(3));
        assert!(Score::Heuristic(1) > Score::Heuristic(-1));
    }

    #[test]
    fn test_faster_win_outranks_slower() {
        assert!(Score::Win(1) > Score::Win(3));
        assert!(Score::Win(0) >= Score::Win(0));
        assert_eq!(Score::MAX, Score::Win(0));
    }

    #[test]
    fn test_slower_loss_outranks_faster() {
        assert!(Score::Loss(3) > Score::Loss(1));
        assert_eq!(Score::MIN, Score::Loss(0));
        assert!(Score::Loss(100) < Score::Heuristic(i32::MIN));
    }

    #[test]
    fn test_at_ply_stamps_terminals_only() {
        assert_eq!(Score::Win(0).at_ply(4), Score::Win(4));
        assert_eq!(Score::Loss(0).at_ply(2), Score::Loss(2));
        assert_eq!(Score::Heuristic(7).at_ply(4), Score::Heuristic(7));
    }

    #[test]
    fn test_evaluate_symmetric_position_is_level() {
        // Black's position transposed equals White's, so the heuristic nets
        // out to zero.
        let state = GameState::with_pieces(&[sq(3, 1), sq(5, 2)], &[sq(1, 3), sq(2, 5)]);
        assert_eq!(
            evaluate(&state, Color::Black, &Weights::default()),
            Score::Heuristic(0)
        );
    }

    #[test]
    fn test_evaluate_flips_with_perspective() {
        let state = GameState::with_pieces(&[sq(2, 2), sq(2, 5)], &[sq(0, 4)]);
        let weights = Weights::default();
        let black = evaluate(&state, Color::Black, &weights);
        let white = evaluate(&state, Color::White, &weights);
        match (black, white) {
            (Score::Heuristic(b), Score::Heuristic(w)) => assert_eq!(b, -w),
            other => panic!("expected heuristic scores, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_decided_positions() {
        let network = [sq(2, 0), sq(2, 2), sq(4, 4), sq(6, 4), sq(6, 6), sq(5, 7)];
        let state = GameState::with_pieces(&network, &[]);
        let weights = Weights::default();
        assert_eq!(evaluate(&state, Color::Black, &weights), Score::MAX);
        assert_eq!(evaluate(&state, Color::White, &weights), Score::MIN);
    }

    #[test]
    fn test_connected_pieces_outscore_scattered() {
        let weights = Weights::default();
        // Two mutually visible black pieces vs the same pieces blocked off
        let linked = GameState::with_pieces(&[sq(2, 2), sq(2, 5)], &[sq(5, 5)]);
        let cut = GameState::with_pieces(&[sq(2, 2), sq(2, 5)], &[sq(2, 4)]);
        let linked_score = evaluate(&linked, Color::Black, &weights);
        let cut_score = evaluate(&cut, Color::Black, &weights);
        assert!(linked_score > cut_score);
    }
}
