//! Turn alternation and terminal-state detection.

use crate::core::{FocusError, GameState, PlayerId};

/// Hand the turn to the other player and bump the turn counter.
pub fn advance_turn(state: &mut GameState) {
    state.current_turn = state.current_turn.opponent();
    state.turn_number += 1;
}

/// The player who has reached `captures_to_win`, if any.
///
/// A recorded winner always takes precedence over the counters.
#[must_use]
pub fn check_winner(state: &GameState, captures_to_win: u32) -> Option<PlayerId> {
    state
        .winner
        .or_else(|| PlayerId::all().find(|&p| state.captures[p] >= captures_to_win))
}

/// Record the winner once one exists. A recorded winner never changes.
pub fn record_winner(state: &mut GameState, captures_to_win: u32) -> Option<PlayerId> {
    if state.winner.is_none() {
        state.winner = check_winner(state, captures_to_win);
    }
    state.winner
}

/// Gate for every mutating operation.
pub fn ensure_in_progress(state: &GameState, captures_to_win: u32) -> Result<(), FocusError> {
    match check_winner(state, captures_to_win) {
        Some(_) => Err(FocusError::GameOver),
        None => Ok(()),
    }
}
