//! # focus-engine
//!
//! Rules engine for Focus (also sold as Domination), a two-player abstract
//! strategy game where each cell of a 6x6 board holds an ordered stack.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing actions**: Every move or placement is validated in
//!    full before anything changes. A rejected action leaves the game
//!    exactly as it was and reports the first rule it broke.
//!
//! 2. **Closed player model**: Exactly two seats, addressed by `PlayerId`,
//!    never by name.
//!
//! 3. **Pieces are conserved**: Pieces only move between the board, the
//!    reserves and the capture piles.
//!
//! ## Modules
//!
//! - `core`: Players, pieces, coordinates, actions, state, configuration, errors
//! - `board`: Cell stacks and the grid
//! - `rules`: Validation, execution, overflow resolution, turns and wins
//! - `games`: The `FocusGame` facade

pub mod board;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Coord, FocusError, GameState, Move, Piece, PlayerId, PlayerMap,
    PlayerProfile, RulesConfig, SetupError, BOARD_SIZE, TOTAL_PIECES,
};

pub use crate::board::{Board, PieceStack};

pub use crate::rules::{GameResult, MoveOutcome, Resolution, RulesEngine, Settlement};

pub use crate::games::focus::{FocusGame, FocusGameBuilder, FocusRules};
