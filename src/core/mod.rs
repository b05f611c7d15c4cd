//! Core types: players, pieces, coordinates, actions, state, configuration, errors.

pub mod action;
pub mod config;
pub mod coord;
pub mod error;
pub mod piece;
pub mod player;
pub mod state;

pub use action::{Action, ActionRecord, Move};
pub use config::RulesConfig;
pub use coord::{Coord, BOARD_SIZE};
pub use error::{FocusError, SetupError};
pub use piece::Piece;
pub use player::{PlayerId, PlayerMap, PlayerProfile};
pub use state::{GameState, TOTAL_PIECES};
