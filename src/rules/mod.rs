//! Focus rules.
//!
//! - `validator`: Legality checks, first failure wins
//! - `executor`: Stack transfer and overflow resolution
//! - `resolver`: Reserve-or-capture classification of pushed-off pieces
//! - `turn`: Turn alternation and win detection
//! - `engine`: The `RulesEngine` trait tying them together

pub mod engine;
pub mod executor;
pub mod resolver;
pub mod turn;
pub mod validator;

pub use engine::{GameResult, MoveOutcome, RulesEngine};
pub use resolver::{Resolution, Settlement};
