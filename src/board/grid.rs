//! The 6x6 grid of piece stacks.
//!
//! `Board` is plain storage: it never checks whose turn it is or whether a
//! move is legal. Indexing with an off-board `Coord` panics, so callers go
//! through [`Board::stack_at`] when the coordinate came from outside.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::stack::PieceStack;
use crate::core::{Coord, PlayerId, BOARD_SIZE};

/// Grid of cell stacks addressed by (row, col).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[PieceStack; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard opening position: one piece per cell.
    ///
    /// ```text
    ///   A A B B A A      row 0
    ///   B B A A B B      row 1
    ///   ... alternating down to row 5
    /// ```
    /// where `A` is `PlayerId::First` and `B` is `PlayerId::Second`.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for at in Coord::all() {
            board[at] = PieceStack::single(Self::initial_owner(at));
        }
        board
    }

    /// Owner of the piece on `at` in the opening position.
    fn initial_owner(at: Coord) -> PlayerId {
        let first_on_even_row = (at.col / 2) % 2 == 0;
        let odd_row = at.row % 2 == 1;
        if first_on_even_row != odd_row {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// Stack at `at`, or `None` when the coordinate is off the board.
    #[must_use]
    pub fn stack_at(&self, at: Coord) -> Option<&PieceStack> {
        let (row, col) = at.to_index()?;
        Some(&self.cells[row][col])
    }

    pub fn stack_at_mut(&mut self, at: Coord) -> Option<&mut PieceStack> {
        let (row, col) = at.to_index()?;
        Some(&mut self.cells[row][col])
    }

    /// Number of pieces on `at`. Off-board cells hold nothing.
    #[must_use]
    pub fn stack_size(&self, at: Coord) -> usize {
        self.stack_at(at).map_or(0, PieceStack::len)
    }

    /// Replace the contents of a cell wholesale.
    ///
    /// Panics if `at` is off the board.
    pub fn set_stack(&mut self, at: Coord, stack: PieceStack) {
        self[at] = stack;
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &PieceStack)> {
        Coord::all().map(move |at| (at, &self[at]))
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells().map(|(_, stack)| stack.len()).sum()
    }

    /// Number of on-board pieces owned by `player`.
    #[must_use]
    pub fn pieces_owned_by(&self, player: PlayerId) -> usize {
        self.cells().map(|(_, stack)| stack.count_owned_by(player)).sum()
    }
}

impl Index<Coord> for Board {
    type Output = PieceStack;

    fn index(&self, at: Coord) -> &Self::Output {
        &self.cells[at.row as usize][at.col as usize]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, at: Coord) -> &mut Self::Output {
        &mut self.cells[at.row as usize][at.col as usize]
    }
}
