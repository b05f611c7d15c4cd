//! Board coordinates.
//!
//! `(0, 0)` is the top-left corner and `(5, 5)` the bottom-right one; rows
//! grow downward and columns grow rightward. Components are signed so that
//! off-board input from a caller can be represented and rejected.

use serde::{Deserialize, Serialize};

/// Side length of the square Focus board.
pub const BOARD_SIZE: usize = 6;

/// A zero-based (row, col) board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether both components lie in `[0, BOARD_SIZE)`.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Array indices for an on-board coordinate.
    ///
    /// Returns `None` when the coordinate is off the board.
    #[must_use]
    pub fn to_index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Iterate over all 36 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Offset this coordinate by a signed delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
