//! Board storage: per-cell ordered stacks on a fixed 6x6 grid.
//!
//! ## Key Types
//!
//! - `PieceStack`: Bottom-to-top pieces on one cell
//! - `Board`: The grid of stacks, addressed by `Coord`

pub mod grid;
pub mod stack;

pub use grid::Board;
pub use stack::PieceStack;
