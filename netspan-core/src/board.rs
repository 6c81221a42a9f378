//! Board geometry for the 8x8 Network grid

use serde::{Deserialize, Serialize};

/// Board side length
pub const BOARD_SIZE: i8 = 8;

/// Grid coordinates, (0, 0) at the top left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if this square is on the board
    pub fn on_board(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// The four corner squares belong to neither color
    pub fn is_corner(&self) -> bool {
        (self.x == 0 || self.x == BOARD_SIZE - 1) && (self.y == 0 || self.y == BOARD_SIZE - 1)
    }

    /// Square one step away in the given direction
    pub const fn offset(&self, dx: i8, dy: i8) -> Square {
        Square::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance to the four-square board center (0..=3)
    pub fn center_distance(&self) -> i8 {
        let dx = (2 * self.x - (BOARD_SIZE - 1)).abs();
        let dy = (2 * self.y - (BOARD_SIZE - 1)).abs();
        dx.max(dy) / 2
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Direction vectors (dx, dy); y grows downward
/// Index: 0=N, 1=NE, 2=E, 3=SE, 4=S, 5=SW, 6=W, 7=NW
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];
