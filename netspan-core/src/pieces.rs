//! Colors, goal regions and piece values

use crate::board::{Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Piece color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Goal edge where this color's networks begin: the top row for Black,
    /// the left column for White. Corners belong to neither goal.
    pub fn in_first_goal(self, sq: Square) -> bool {
        let on_edge = match self {
            Color::Black => sq.y == 0,
            Color::White => sq.x == 0,
        };
        on_edge && !sq.is_corner()
    }

    /// The opposite goal edge: the bottom row for Black, the right column
    /// for White.
    pub fn in_second_goal(self, sq: Square) -> bool {
        let on_edge = match self {
            Color::Black => sq.y == BOARD_SIZE - 1,
            Color::White => sq.x == BOARD_SIZE - 1,
        };
        on_edge && !sq.is_corner()
    }

    pub fn in_goal(self, sq: Square) -> bool {
        self.in_first_goal(sq) || self.in_second_goal(sq)
    }

    /// Squares this color may occupy or see through: on the board, not a
    /// corner, not on the opponent's goal edges.
    pub fn in_valid_region(self, sq: Square) -> bool {
        sq.on_board() && !sq.is_corner() && !self.opponent().in_goal(sq)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "B"),
            Color::White => write!(f, "W"),
        }
    }
}

/// A piece on the board. Equality is structural: two pieces are the same
/// piece exactly when color and square match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub square: Square,
}

impl Piece {
    pub const fn new(color: Color, square: Square) -> Self {
        Self { color, square }
    }
}
