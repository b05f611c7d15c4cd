//! Focus (a.k.a. Domination).
//!
//! Two players on a 6x6 board where every cell holds a stack:
//! - Move the top N pieces of a stack you control exactly N cells in a line
//! - Stacks taller than five lose pieces off the bottom: your own go to
//!   reserve, the opponent's are captured
//! - Reserved pieces can be dropped on any cell instead of moving
//! - First player to six captures wins

mod game;
mod rules;

pub use game::{FocusGame, FocusGameBuilder};
pub use rules::FocusRules;
