//! Classification of pieces pushed off the bottom of a stack.
//!
//! A piece that belongs to the mover goes back to the mover's reserve.
//! Any other piece is captured by the mover. Either way it leaves the board.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Piece, PlayerId};

/// Where a pushed-off piece ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Settlement {
    Reserved,
    Captured,
}

/// Tally of pieces pushed off during one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub reserved: u32,
    pub captured: u32,
}

impl Resolution {
    pub fn record(&mut self, settlement: Settlement) {
        match settlement {
            Settlement::Reserved => self.reserved += 1,
            Settlement::Captured => self.captured += 1,
        }
    }

    /// Total pieces removed from the board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.reserved + self.captured
    }
}

/// Credit a removed `piece` to `mover`'s reserve or captures.
pub fn settle(state: &mut GameState, mover: PlayerId, piece: Piece) -> Settlement {
    if piece.is_owned_by(mover) {
        state.reserves[mover] += 1;
        Settlement::Reserved
    } else {
        state.captures[mover] += 1;
        Settlement::Captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerProfile;

    fn new_state() -> GameState {
        GameState::new(PlayerProfile::new("PlayerA", 'R'), PlayerProfile::new("PlayerB", 'G'))
    }

    #[test]
    fn test_own_piece_is_reserved() {
        let mut state = new_state();

        let settlement = settle(&mut state, PlayerId::First, Piece::new(PlayerId::First));

        assert_eq!(settlement, Settlement::Reserved);
        assert_eq!(state.reserve_count(PlayerId::First), 1);
        assert_eq!(state.capture_count(PlayerId::First), 0);
    }

    #[test]
    fn test_opponent_piece_is_captured() {
        let mut state = new_state();

        let settlement = settle(&mut state, PlayerId::Second, Piece::new(PlayerId::First));

        assert_eq!(settlement, Settlement::Captured);
        assert_eq!(state.capture_count(PlayerId::Second), 1);
        assert_eq!(state.reserve_count(PlayerId::Second), 0);
        // The owner of the captured piece is not credited.
        assert_eq!(state.reserve_count(PlayerId::First), 0);
    }

    #[test]
    fn test_resolution_tally() {
        let mut resolution = Resolution::default();
        resolution.record(Settlement::Captured);
        resolution.record(Settlement::Reserved);
        resolution.record(Settlement::Captured);

        assert_eq!(resolution.captured, 2);
        assert_eq!(resolution.reserved, 1);
        assert_eq!(resolution.total(), 3);
    }
}
