//! Game state.
//!
//! `GameState` is everything that changes over a game of Focus:
//! - The board of stacks
//! - Each player's reserve and capture counters
//! - Whose turn it is, the turn number, and the winner once decided
//! - Action history
//!
//! Fields are crate-private. Callers read through accessors and change
//! state only by submitting actions to the rules.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::coord::{Coord, BOARD_SIZE};
use super::player::{PlayerId, PlayerMap, PlayerProfile};
use crate::board::{Board, PieceStack};

/// Pieces in play for the whole game: one per cell of the opening board.
pub const TOTAL_PIECES: usize = BOARD_SIZE * BOARD_SIZE;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,

    pub(crate) profiles: PlayerMap<PlayerProfile>,

    /// Own pieces pushed off a stack, available for re-placement.
    pub(crate) reserves: PlayerMap<u32>,

    /// Opponent pieces pushed off a stack, out of play for good.
    pub(crate) captures: PlayerMap<u32>,

    pub(crate) current_turn: PlayerId,

    /// Turn number (starts at 1, increments on every applied action).
    pub(crate) turn_number: u32,

    pub(crate) winner: Option<PlayerId>,

    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state with the standard opening position.
    ///
    /// `first` moves first. Counters start at zero.
    #[must_use]
    pub fn new(first: PlayerProfile, second: PlayerProfile) -> Self {
        Self::with_board(first, second, Board::initial())
    }

    /// Create a state with a custom board and zeroed counters.
    #[must_use]
    pub fn with_board(first: PlayerProfile, second: PlayerProfile, board: Board) -> Self {
        Self {
            board,
            profiles: PlayerMap::from_pair(first, second),
            reserves: PlayerMap::with_value(0),
            captures: PlayerMap::with_value(0),
            current_turn: PlayerId::First,
            turn_number: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    // === Board ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stack at `at`, or `None` when off the board.
    #[must_use]
    pub fn stack_at(&self, at: Coord) -> Option<&PieceStack> {
        self.board.stack_at(at)
    }

    // === Players ===

    #[must_use]
    pub fn profile(&self, player: PlayerId) -> &PlayerProfile {
        &self.profiles[player]
    }

    /// Look up a seat by the name it was registered with.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        self.profiles
            .iter()
            .find(|(_, profile)| profile.name == name)
            .map(|(player, _)| player)
    }

    #[must_use]
    pub fn reserve_count(&self, player: PlayerId) -> u32 {
        self.reserves[player]
    }

    #[must_use]
    pub fn capture_count(&self, player: PlayerId) -> u32 {
        self.captures[player]
    }

    // === Progression ===

    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    // === Action History ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an action in history.
    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    // === Accounting ===

    /// Board pieces plus every reserve and capture.
    ///
    /// Equals [`TOTAL_PIECES`] for any state reached from a legal setup.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        let off_board: u32 = PlayerId::all()
            .map(|p| self.reserves[p] + self.captures[p])
            .sum();
        self.board.piece_count() + off_board as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(PlayerProfile::new("PlayerA", 'R'), PlayerProfile::new("PlayerB", 'G'))
    }

    #[test]
    fn test_game_state_new() {
        let state = new_state();

        assert_eq!(state.current_turn(), PlayerId::First);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.winner(), None);
        for player in PlayerId::all() {
            assert_eq!(state.reserve_count(player), 0);
            assert_eq!(state.capture_count(player), 0);
        }
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_opening_total() {
        let state = new_state();
        assert_eq!(state.board().piece_count(), TOTAL_PIECES);
        assert_eq!(state.total_pieces(), TOTAL_PIECES);
    }

    #[test]
    fn test_player_by_name() {
        let state = new_state();

        assert_eq!(state.player_by_name("PlayerA"), Some(PlayerId::First));
        assert_eq!(state.player_by_name("PlayerB"), Some(PlayerId::Second));
        assert_eq!(state.player_by_name("PlayerC"), None);
        assert_eq!(state.profile(PlayerId::Second).symbol, 'G');
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = new_state();
        state.record_action(ActionRecord::new(
            PlayerId::First,
            crate::core::Action::PlaceReserve { location: Coord::new(0, 0) },
            1,
        ));

        let cloned = state.clone();

        assert_eq!(cloned.history().len(), 1);
        assert_eq!(cloned, state);
    }
}
