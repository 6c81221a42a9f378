//! Piece connectivity and winning-network detection

use crate::board::{Square, DIRECTIONS};
use crate::game::GameState;
use crate::pieces::{Color, Piece};
use rustc_hash::FxHashSet;

/// Minimum pieces in a winning network
pub const MIN_NETWORK_PIECES: usize = 6;

/// Same-color pieces a piece connects to along the eight directions.
///
/// A connection is an unbroken run of empty squares inside the color's
/// valid region ending on a same-color piece. Any piece on the line blocks
/// sight past it; leaving the region ends the walk.
pub fn connections(state: &GameState, piece: &Piece) -> Vec<Piece> {
    let mut found = Vec::new();
    for &(dx, dy) in &DIRECTIONS {
        let mut probe = piece.square.offset(dx, dy);
        while state.in_valid_region(probe, piece.color) && !state.has_piece(probe) {
            probe = probe.offset(dx, dy);
        }
        if state.in_valid_region(probe, piece.color) {
            if let Some(other) = state.piece_at(probe) {
                if other.color == piece.color {
                    found.push(other);
                }
            }
        }
    }
    found
}

/// Whether a color has a complete winning network: a chain of at least
/// [`MIN_NETWORK_PIECES`] connected pieces from one goal edge to the other,
/// turning at every interior piece, touching the goal edges only at its
/// endpoints, and using no piece twice.
pub fn has_network(state: &GameState, color: Color) -> bool {
    state
        .pieces(color)
        .into_iter()
        .filter(|p| color.in_first_goal(p.square))
        .any(|start| {
            let mut visited = FxHashSet::default();
            reaches_far_goal(state, &start, None, 1, &mut visited)
        })
}

/// Depth-first extension of a path ending at `piece`. `visited` holds the
/// squares of the current path only: inserted on descend, removed on
/// backtrack, empty again when the outermost call returns.
fn reaches_far_goal(
    state: &GameState,
    piece: &Piece,
    arrival: Option<(i8, i8)>,
    length: usize,
    visited: &mut FxHashSet<Square>,
) -> bool {
    if piece.color.in_second_goal(piece.square) {
        return length >= MIN_NETWORK_PIECES;
    }
    visited.insert(piece.square);
    for next in connections(state, piece) {
        let dir = direction_between(piece.square, next.square);
        if arrival == Some(dir) {
            continue; // the chain must turn at every piece
        }
        if visited.contains(&next.square) {
            continue;
        }
        if piece.color.in_first_goal(next.square) {
            continue; // goal squares are endpoints only
        }
        if reaches_far_goal(state, &next, Some(dir), length + 1, visited) {
            visited.remove(&piece.square);
            return true;
        }
    }
    visited.remove(&piece.square);
    false
}

fn direction_between(from: Square, to: Square) -> (i8, i8) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::random_position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y)
    }

    fn piece_at(state: &GameState, x: i8, y: i8) -> Piece {
        state.piece_at(sq(x, y)).expect("fixture piece missing")
    }

    /// Six black pieces forming a top-to-bottom network:
    /// (2,0) S (2,2) SE (4,4) E (6,4) S (6,6) SW (5,7)
    fn black_network() -> Vec<Square> {
        vec![sq(2, 0), sq(2, 2), sq(4, 4), sq(6, 4), sq(6, 6), sq(5, 7)]
    }

    #[test]
    fn test_lone_piece_has_no_connections() {
        let state = GameState::with_pieces(&[sq(3, 3)], &[]);
        assert!(connections(&state, &piece_at(&state, 3, 3)).is_empty());
    }

    #[test]
    fn test_connection_along_empty_run() {
        let state = GameState::with_pieces(&[sq(2, 2), sq(2, 6), sq(6, 2)], &[]);
        let from = piece_at(&state, 2, 2);
        let found = connections(&state, &from);
        assert!(found.contains(&piece_at(&state, 2, 6))); // down the column
        assert!(found.contains(&piece_at(&state, 6, 2))); // along the row
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_enemy_piece_blocks_sight() {
        let state = GameState::with_pieces(&[sq(2, 2), sq(2, 6)], &[sq(2, 4)]);
        let found = connections(&state, &piece_at(&state, 2, 2));
        assert!(found.is_empty());
    }

    #[test]
    fn test_own_piece_connects_nearer_only() {
        let state = GameState::with_pieces(&[sq(2, 2), sq(2, 4), sq(2, 6)], &[]);
        let found = connections(&state, &piece_at(&state, 2, 2));
        assert!(found.contains(&piece_at(&state, 2, 4)));
        assert!(!found.contains(&piece_at(&state, 2, 6)));
    }

    #[test]
    fn test_walk_stops_at_opponent_goal_edge() {
        // Walks leaving Black's valid region (White's goal columns, the
        // corners) end without a connection; only the column link remains
        let state = GameState::with_pieces(&[sq(1, 0), sq(1, 7)], &[]);
        let found = connections(&state, &piece_at(&state, 1, 0));
        assert!(found.contains(&piece_at(&state, 1, 7)));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_connectivity_is_symmetric_on_random_positions() {
        for seed in 0..20u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = random_position(&mut rng, 12);
            for color in [Color::Black, Color::White] {
                for piece in state.pieces(color) {
                    for other in connections(&state, &piece) {
                        let back = connections(&state, &other);
                        assert!(
                            back.contains(&piece),
                            "seed {seed}: {piece:?} sees {other:?} but not back"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_complete_network_detected() {
        let state = GameState::with_pieces(&black_network(), &[]);
        assert!(has_network(&state, Color::Black));
        assert!(!has_network(&state, Color::White));
    }

    #[test]
    fn test_five_pieces_are_not_enough() {
        let mut squares = black_network();
        squares.remove(2); // break the chain in the middle
        let state = GameState::with_pieces(&squares, &[]);
        assert!(!has_network(&state, Color::Black));
    }

    #[test]
    fn test_network_must_turn_at_every_piece() {
        // Six pieces connected but collinear down one column: every hop
        // repeats the same direction, so no network forms.
        let squares = vec![sq(2, 0), sq(2, 2), sq(2, 3), sq(2, 4), sq(2, 6), sq(2, 7)];
        let state = GameState::with_pieces(&squares, &[]);
        assert!(!has_network(&state, Color::Black));
    }

    #[test]
    fn test_network_broken_by_blocker() {
        // White on (5,4) cuts the (4,4) -> (6,4) segment
        let blocked = GameState::with_pieces(&black_network(), &[sq(5, 4)]);
        assert!(!has_network(&blocked, Color::Black));

        // The same white piece elsewhere leaves the network intact
        let clear = GameState::with_pieces(&black_network(), &[sq(0, 4)]);
        assert!(has_network(&clear, Color::Black));
    }

    #[test]
    fn test_goal_pieces_are_endpoints_only() {
        // The only route from (2,0) must re-enter the top goal row through
        // (5,0): paths may not pass through a goal square, so no network.
        let squares = vec![sq(2, 0), sq(2, 3), sq(5, 0), sq(5, 3), sq(3, 5), sq(3, 7), sq(6, 5)];
        let state = GameState::with_pieces(&squares, &[sq(0, 1), sq(7, 1)]);
        let from_start = connections(&state, &piece_at(&state, 2, 0));
        assert!(!from_start.is_empty());
        // hand-check: (2,3)-(5,0) diagonal exists, but continuing through a
        // goal row piece is rejected by the detector
        assert!(!has_network(&state, Color::Black));
    }

    #[test]
    fn test_detector_is_idempotent() {
        let state = GameState::with_pieces(&black_network(), &[]);
        let first = has_network(&state, Color::Black);
        let second = has_network(&state, Color::Black);
        assert_eq!(first, second);

        let empty = GameState::new();
        assert!(!has_network(&empty, Color::Black));
        assert!(!has_network(&empty, Color::Black));
    }
}
