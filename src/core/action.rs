//! Action representation.
//!
//! A turn in Focus is one of two things:
//! - Moving the top `count` pieces of a stack exactly `count` cells in a
//!   straight line
//! - Placing one piece from reserve onto any cell
//!
//! Applied actions are kept as `ActionRecord`s for replay and debugging.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// A stack move: take the top `count` pieces at `start` and drop them on `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
    pub count: usize,
}

impl Move {
    #[must_use]
    pub fn new(start: impl Into<Coord>, end: impl Into<Coord>, count: usize) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            count,
        }
    }

    /// Row and column deltas from start to end.
    ///
    /// `None` when a delta does not fit in `i32`, which only happens for
    /// off-board endpoints.
    #[must_use]
    pub fn deltas(&self) -> Option<(i32, i32)> {
        let d_row = self.end.row.checked_sub(self.start.row)?;
        let d_col = self.end.col.checked_sub(self.start.col)?;
        Some((d_row, d_col))
    }
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{Action, Coord, Move};
///
/// let slide = Action::Move(Move::new((0, 1), (0, 2), 1));
/// let drop = Action::PlaceReserve { location: Coord::new(3, 3) };
///
/// assert_eq!(slide.destination(), Coord::new(0, 2));
/// assert_eq!(drop.destination(), Coord::new(3, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move pieces between two board cells.
    Move(Move),
    /// Drop one reserved piece onto a cell.
    PlaceReserve { location: Coord },
}

impl Action {
    /// Cell whose stack grows as a result of this action.
    #[must_use]
    pub fn destination(&self) -> Coord {
        match self {
            Action::Move(mv) => mv.end,
            Action::PlaceReserve { location } => *location,
        }
    }
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Move(mv)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_deltas() {
        let mv = Move::new((4, 2), (1, 2), 3);
        assert_eq!(mv.deltas(), Some((-3, 0)));
    }

    #[test]
    fn test_move_deltas_overflow() {
        let mv = Move::new((i32::MIN, 0), (i32::MAX, 0), 1);
        assert_eq!(mv.deltas(), None);
    }

    #[test]
    fn test_action_from_move() {
        let mv = Move::new((0, 0), (0, 1), 1);
        let action: Action = mv.into();
        assert_eq!(action, Action::Move(mv));
    }

    #[test]
    fn test_action_record() {
        let action = Action::PlaceReserve { location: Coord::new(2, 2) };
        let record = ActionRecord::new(PlayerId::Second, action, 4);

        assert_eq!(record.player, PlayerId::Second);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 4);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Move(Move::new((1, 1), (1, 3), 2));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
