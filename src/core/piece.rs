//! Game pieces.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single piece. Pieces are interchangeable apart from their owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self { owner }
    }

    /// Check whether this piece belongs to `player`.
    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self.owner == player
    }
}
