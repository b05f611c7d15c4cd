//! Rules engine trait.
//!
//! A `RulesEngine` owns the rule constants and turns actions into state
//! changes:
//! - Whether an action is legal right now
//! - How a legal action changes the state
//! - When the game is over

use serde::{Deserialize, Serialize};

use super::resolver::Resolution;
use crate::core::{Action, FocusError, GameState, PlayerId, RulesConfig};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner. Focus has no draws.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// What a successful action did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Pieces pushed off the destination stack.
    pub resolution: Resolution,

    /// Set when this action ended the game.
    pub winner: Option<PlayerId>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: Must not mutate; the first broken rule is reported
/// - `apply_action`: Either applies the action fully or returns an error
///   with `state` untouched
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Check whether `player` may take `action` now.
    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<(), FocusError>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<MoveOutcome, FocusError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Every action worth asking `validate` about for `player`.
    ///
    /// May include illegal actions; `legal_actions` filters them.
    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.candidate_actions(state, player)
            .into_iter()
            .filter(|action| self.validate(state, player, action).is_ok())
            .collect()
    }
}
