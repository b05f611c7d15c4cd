//! Ordered piece stacks.
//!
//! A `PieceStack` stores pieces bottom-to-top. The last element is the
//! controlling piece: the one whose owner may move the stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Piece, PlayerId};

/// Ordered stack of pieces on one cell, bottom first.
///
/// Inline capacity covers the tallest transient stack (5 resting pieces
/// plus a full 5-piece move) without touching the heap.
///
/// ## Usage
///
/// ```
/// use focus_engine::board::PieceStack;
/// use focus_engine::core::{Piece, PlayerId};
///
/// let mut stack = PieceStack::new();
/// stack.push_top(Piece::new(PlayerId::First));
/// stack.push_top(Piece::new(PlayerId::Second));
///
/// assert_eq!(stack.top(), Some(Piece::new(PlayerId::Second)));
/// assert_eq!(stack.pop_bottom(), Some(Piece::new(PlayerId::First)));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceStack {
    pieces: SmallVec<[Piece; 10]>,
}

impl PieceStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from pieces listed bottom first.
    pub fn from_bottom_up(pieces: impl IntoIterator<Item = Piece>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    /// A one-piece stack owned by `owner`.
    #[must_use]
    pub fn single(owner: PlayerId) -> Self {
        Self::from_bottom_up([Piece::new(owner)])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The controlling piece, if any.
    #[must_use]
    pub fn top(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    #[must_use]
    pub fn bottom(&self) -> Option<Piece> {
        self.pieces.first().copied()
    }

    pub fn push_top(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn pop_top(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    /// Remove the piece at the very bottom of the stack.
    pub fn pop_bottom(&mut self) -> Option<Piece> {
        if self.pieces.is_empty() {
            None
        } else {
            Some(self.pieces.remove(0))
        }
    }

    /// Split off the top `count` pieces as their own stack.
    ///
    /// The removed group keeps its internal order, so its top is the
    /// former top of `self`. Returns `None` and leaves `self` untouched
    /// when fewer than `count` pieces are present.
    pub fn take_top(&mut self, count: usize) -> Option<PieceStack> {
        let split = self.pieces.len().checked_sub(count)?;
        Some(Self {
            pieces: self.pieces.drain(split..).collect(),
        })
    }

    /// Put a whole group on top of this stack, preserving the group's order.
    pub fn place_on_top(&mut self, group: PieceStack) {
        self.pieces.extend(group.pieces);
    }

    /// Pieces from bottom to top.
    pub fn iter_bottom_up(&self) -> impl DoubleEndedIterator<Item = Piece> + '_ {
        self.pieces.iter().copied()
    }

    /// Pieces from top to bottom, as seen looking down on the board.
    pub fn iter_top_down(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().rev().copied()
    }

    /// Number of pieces in this stack owned by `player`.
    #[must_use]
    pub fn count_owned_by(&self, player: PlayerId) -> usize {
        self.pieces.iter().filter(|p| p.is_owned_by(player)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Piece = Piece::new(PlayerId::First);
    const B: Piece = Piece::new(PlayerId::Second);

    #[test]
    fn test_empty_stack() {
        let mut stack = PieceStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.pop_top(), None);
        assert_eq!(stack.pop_bottom(), None);
    }

    #[test]
    fn test_take_top_preserves_order() {
        let mut stack = PieceStack::from_bottom_up([A, B, A, B]);

        let group = stack.take_top(3).unwrap();

        assert_eq!(stack.iter_bottom_up().collect::<Vec<_>>(), vec![A]);
        assert_eq!(group.iter_bottom_up().collect::<Vec<_>>(), vec![B, A, B]);
        assert_eq!(group.top(), Some(B));
    }

    #[test]
    fn test_take_top_too_many() {
        let mut stack = PieceStack::from_bottom_up([A, B]);
        assert_eq!(stack.take_top(3), None);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_take_top_all() {
        let mut stack = PieceStack::from_bottom_up([A, B]);
        let group = stack.take_top(2).unwrap();
        assert!(stack.is_empty());
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_place_on_top() {
        let mut dest = PieceStack::from_bottom_up([B, B]);
        dest.place_on_top(PieceStack::from_bottom_up([A, B, A]));

        assert_eq!(dest.iter_bottom_up().collect::<Vec<_>>(), vec![B, B, A, B, A]);
        assert_eq!(dest.iter_top_down().collect::<Vec<_>>(), vec![A, B, A, B, B]);
    }

    #[test]
    fn test_pop_bottom() {
        let mut stack = PieceStack::from_bottom_up([B, A, A]);
        assert_eq!(stack.pop_bottom(), Some(B));
        assert_eq!(stack.bottom(), Some(A));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_count_owned_by() {
        let stack = PieceStack::from_bottom_up([A, B, A]);
        assert_eq!(stack.count_owned_by(PlayerId::First), 2);
        assert_eq!(stack.count_owned_by(PlayerId::Second), 1);
    }
}
