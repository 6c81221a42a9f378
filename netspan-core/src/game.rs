//! Game state, move legality and apply/undo

use crate::board::{Square, BOARD_SIZE, DIRECTIONS};
use crate::network;
use crate::pieces::{Color, Piece};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pieces each color places before step moves begin
pub const PIECES_PER_SIDE: u8 = 10;

// ============================================================================
// MOVES
// ============================================================================

/// A move by one color: place a new piece, or relocate a placed one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Add { color: Color, to: Square },
    Step { color: Color, from: Square, to: Square },
}

impl Move {
    /// The acting color
    pub fn color(&self) -> Color {
        match self {
            Move::Add { color, .. } | Move::Step { color, .. } => *color,
        }
    }

    /// The square the moved piece ends up on
    pub fn to(&self) -> Square {
        match self {
            Move::Add { to, .. } | Move::Step { to, .. } => *to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Add { color, to } => write!(f, "{} +{}", color, to),
            Move::Step { color, from, to } => write!(f, "{} {}->{}", color, from, to),
        }
    }
}

/// Why a move was rejected
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("destination is off the board, a corner, or reserved for the opponent")]
    OutsideRegion,
    #[error("destination square is already occupied")]
    Occupied,
    #[error("move would leave a connected group of three pieces")]
    Cluster,
    #[error("all pieces are placed; only step moves are allowed")]
    AddPhaseOver,
    #[error("pieces remain in hand; step moves are not allowed yet")]
    StepPhaseNotReached,
    #[error("no piece of the moving color at the step origin")]
    MissingPiece,
    #[error("step origin and destination are the same square")]
    NullStep,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board state: occupancy grid plus per-color placement counts.
///
/// Mutated in place by `apply` and restored by `undo`; the two always pair
/// up in stack order, so the state compares equal before and after any
/// exploration of a subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: [[Option<Color>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    placed: [u8; 2],
}

impl GameState {
    /// Empty board, no pieces placed
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            placed: [0, 0],
        }
    }

    /// Build a position directly from piece lists (test setups, openings)
    pub fn with_pieces(black: &[Square], white: &[Square]) -> Self {
        let mut state = Self::new();
        for &sq in black {
            state.place(sq, Color::Black);
        }
        for &sq in white {
            state.place(sq, Color::White);
        }
        state.placed = [black.len() as u8, white.len() as u8];
        state
    }

    fn place(&mut self, sq: Square, color: Color) {
        debug_assert!(color.in_valid_region(sq), "piece outside {color}'s region");
        debug_assert!(self.cell(sq).is_none(), "two pieces on one square");
        *self.cell_mut(sq) = Some(color);
    }

    fn cell(&self, sq: Square) -> Option<Color> {
        self.grid[sq.y as usize][sq.x as usize]
    }

    fn cell_mut(&mut self, sq: Square) -> &mut Option<Color> {
        &mut self.grid[sq.y as usize][sq.x as usize]
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn has_piece(&self, sq: Square) -> bool {
        self.cell(sq).is_some()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.cell(sq)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).map(|color| Piece::new(color, sq))
    }

    /// Pieces of a color, in row-major scan order
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        let mut found = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let sq = Square::new(x, y);
                if self.cell(sq) == Some(color) {
                    found.push(Piece::new(color, sq));
                }
            }
        }
        found
    }

    /// Number of pieces a color has placed so far
    pub fn placed(&self, color: Color) -> u8 {
        self.placed[color as usize]
    }

    pub fn in_add_phase(&self, color: Color) -> bool {
        self.placed(color) < PIECES_PER_SIDE
    }

    /// Geometric validity predicate consumed by the connectivity walk
    pub fn in_valid_region(&self, sq: Square, color: Color) -> bool {
        color.in_valid_region(sq)
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Check a move, reporting why it is illegal
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::Add { color, to } => {
                if !self.in_add_phase(color) {
                    return Err(MoveError::AddPhaseOver);
                }
                self.check_target(to, color, None)
            }
            Move::Step { color, from, to } => {
                if self.in_add_phase(color) {
                    return Err(MoveError::StepPhaseNotReached);
                }
                if self.cell(from) != Some(color) {
                    return Err(MoveError::MissingPiece);
                }
                if from == to {
                    return Err(MoveError::NullStep);
                }
                self.check_target(to, color, Some(from))
            }
        }
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    fn check_target(&self, to: Square, color: Color, vacated: Option<Square>) -> Result<(), MoveError> {
        if !color.in_valid_region(to) {
            return Err(MoveError::OutsideRegion);
        }
        if self.has_piece(to) {
            return Err(MoveError::Occupied);
        }
        if self.forms_cluster(to, color, vacated) {
            return Err(MoveError::Cluster);
        }
        Ok(())
    }

    /// A piece may have at most one same-color neighbor, and that neighbor
    /// must itself have no other same-color neighbor. For step moves the
    /// vacated square no longer counts.
    fn forms_cluster(&self, to: Square, color: Color, vacated: Option<Square>) -> bool {
        let mut lone_neighbor = None;
        for &(dx, dy) in &DIRECTIONS {
            let n = to.offset(dx, dy);
            if !n.on_board() || Some(n) == vacated {
                continue;
            }
            if self.cell(n) == Some(color) {
                if lone_neighbor.is_some() {
                    return true;
                }
                lone_neighbor = Some(n);
            }
        }
        if let Some(n) = lone_neighbor {
            for &(dx, dy) in &DIRECTIONS {
                let m = n.offset(dx, dy);
                if !m.on_board() || m == to || Some(m) == vacated {
                    continue;
                }
                if self.cell(m) == Some(color) {
                    return true;
                }
            }
        }
        false
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// All legal moves for a color, in a deterministic order: destinations
    /// scanned row-major, step origins in piece scan order.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.in_add_phase(color) {
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    let mv = Move::Add { color, to: Square::new(x, y) };
                    if self.is_legal(mv) {
                        moves.push(mv);
                    }
                }
            }
        } else {
            for piece in self.pieces(color) {
                for y in 0..BOARD_SIZE {
                    for x in 0..BOARD_SIZE {
                        let mv = Move::Step { color, from: piece.square, to: Square::new(x, y) };
                        if self.is_legal(mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }

    // ========================================================================
    // APPLY / UNDO
    // ========================================================================

    /// Apply a move. Assumes legality; checked only by the public intake
    /// paths, not inside the search loop.
    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Add { color, to } => {
                debug_assert!(self.cell(to).is_none(), "add onto an occupied square");
                *self.cell_mut(to) = Some(color);
                self.placed[color as usize] += 1;
            }
            Move::Step { color, from, to } => {
                let moved = self.cell_mut(from).take().expect("no piece at step origin");
                debug_assert_eq!(moved, color, "step of the wrong color");
                debug_assert!(self.cell(to).is_none(), "step onto an occupied square");
                *self.cell_mut(to) = Some(moved);
            }
        }
    }

    /// Exact inverse of the most recent `apply` of the same move
    pub fn undo(&mut self, mv: Move) {
        match mv {
            Move::Add { color, to } => {
                let removed = self.cell_mut(to).take().expect("undo of an absent add");
                debug_assert_eq!(removed, color, "undo of the wrong color");
                self.placed[color as usize] -= 1;
            }
            Move::Step { color, from, to } => {
                let moved = self.cell_mut(to).take().expect("undo of an absent step");
                debug_assert_eq!(moved, color, "undo of the wrong color");
                debug_assert!(self.cell(from).is_none(), "step origin reoccupied");
                *self.cell_mut(from) = Some(moved);
            }
        }
    }

    // ========================================================================
    // RESULT
    // ========================================================================

    pub fn has_network(&self, color: Color) -> bool {
        network::has_network(self, color)
    }

    /// Winner after a committed move. The mover's network is checked first:
    /// a move completing both networks favors the color that made it.
    pub fn winner_after(&self, mover: Color) -> Option<Color> {
        if self.has_network(mover) {
            Some(mover)
        } else if self.has_network(mover.opponent()) {
            Some(mover.opponent())
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
