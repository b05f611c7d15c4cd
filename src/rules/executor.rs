//! Applying validated actions to the board.
//!
//! Callers must validate first; these functions assume the action is legal
//! and only report an error if the board disagrees with that assumption.
//! An error return leaves the state untouched.

use super::resolver::{self, Resolution};
use crate::core::{Coord, FocusError, GameState, Move, Piece, PlayerId};

/// Transfer the top `mv.count` pieces from `mv.start` onto `mv.end`,
/// then push any excess off the bottom of the destination.
pub fn execute_move(
    state: &mut GameState,
    player: PlayerId,
    mv: &Move,
    max_stack_height: usize,
) -> Result<Resolution, FocusError> {
    if !mv.end.in_bounds() {
        return Err(FocusError::OutOfBounds);
    }
    let group = state
        .board
        .stack_at_mut(mv.start)
        .ok_or(FocusError::OutOfBounds)?
        .take_top(mv.count)
        .ok_or(FocusError::InsufficientPieces)?;
    state.board[mv.end].place_on_top(group);

    Ok(resolve_overflow(state, player, mv.end, max_stack_height))
}

/// Drop one of `player`'s reserved pieces on top of `location`.
pub fn execute_placement(
    state: &mut GameState,
    player: PlayerId,
    location: Coord,
    max_stack_height: usize,
) -> Result<Resolution, FocusError> {
    if state.reserves[player] == 0 {
        return Err(FocusError::NoReserve);
    }
    state
        .board
        .stack_at_mut(location)
        .ok_or(FocusError::OutOfBounds)?
        .push_top(Piece::new(player));
    state.reserves[player] -= 1;

    Ok(resolve_overflow(state, player, location, max_stack_height))
}

/// Pop bottom pieces off `at` until it is no taller than `max_stack_height`,
/// settling each one in favor of `mover`.
pub fn resolve_overflow(
    state: &mut GameState,
    mover: PlayerId,
    at: Coord,
    max_stack_height: usize,
) -> Resolution {
    let mut resolution = Resolution::default();

    while state.board[at].len() > max_stack_height {
        let Some(piece) = state.board[at].pop_bottom() else {
            break;
        };
        resolution.record(resolver::settle(state, mover, piece));
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceStack;
    use crate::core::PlayerProfile;

    const A: Piece = Piece::new(PlayerId::First);
    const B: Piece = Piece::new(PlayerId::Second);

    fn new_state() -> GameState {
        GameState::new(PlayerProfile::new("PlayerA", 'R'), PlayerProfile::new("PlayerB", 'G'))
    }

    #[test]
    fn test_single_piece_move() {
        let mut state = new_state();
        let mv = Move::new((0, 1), (0, 2), 1);

        let resolution = execute_move(&mut state, PlayerId::First, &mv, 5).unwrap();

        assert_eq!(resolution, Resolution::default());
        assert!(state.board[mv.start].is_empty());
        assert_eq!(
            state.board[mv.end].iter_top_down().collect::<Vec<_>>(),
            vec![A, B]
        );
    }

    #[test]
    fn test_partial_stack_move_keeps_order() {
        let mut state = new_state();
        let start = Coord::new(2, 0);
        let end = Coord::new(2, 2);
        state.board.set_stack(start, PieceStack::from_bottom_up([B, B, A, B, A]));

        execute_move(&mut state, PlayerId::First, &Move::new(start, end, 2), 5).unwrap();

        assert_eq!(state.board[start].iter_bottom_up().collect::<Vec<_>>(), vec![B, B, A]);
        // (2, 2) opened with one Second piece.
        assert_eq!(state.board[end].iter_bottom_up().collect::<Vec<_>>(), vec![B, B, A]);
    }

    #[test]
    fn test_overflow_reserves_and_captures() {
        let mut state = new_state();
        let start = Coord::new(3, 3);
        let end = Coord::new(3, 0);
        state.board.set_stack(start, PieceStack::from_bottom_up([A, A, A]));
        state.board.set_stack(end, PieceStack::from_bottom_up([B, A, B, A]));

        let resolution =
            execute_move(&mut state, PlayerId::First, &Move::new(start, end, 3), 5).unwrap();

        // Seven pieces: the two bottom ones (B, A) are pushed off.
        assert_eq!(resolution, Resolution { reserved: 1, captured: 1 });
        assert_eq!(state.board[end].len(), 5);
        assert_eq!(state.board[end].iter_bottom_up().collect::<Vec<_>>(), vec![B, A, A, A, A]);
        assert_eq!(state.reserve_count(PlayerId::First), 1);
        assert_eq!(state.capture_count(PlayerId::First), 1);
    }

    #[test]
    fn test_exactly_full_stack_does_not_overflow() {
        let mut state = new_state();
        let at = Coord::new(4, 4);
        state.board.set_stack(at, PieceStack::from_bottom_up([B; 5]));

        let resolution = resolve_overflow(&mut state, PlayerId::First, at, 5);

        assert_eq!(resolution.total(), 0);
        assert_eq!(state.board[at].len(), 5);
    }

    #[test]
    fn test_placement_consumes_reserve() {
        let mut state = new_state();
        state.reserves[PlayerId::Second] = 2;
        let at = Coord::new(0, 0);

        execute_placement(&mut state, PlayerId::Second, at, 5).unwrap();

        assert_eq!(state.reserve_count(PlayerId::Second), 1);
        assert_eq!(state.board[at].top(), Some(B));
        assert_eq!(state.board[at].len(), 2);
    }

    #[test]
    fn test_placement_overflow() {
        let mut state = new_state();
        state.reserves[PlayerId::Second] = 1;
        let at = Coord::new(1, 1);
        state.board.set_stack(at, PieceStack::from_bottom_up([A, B, B, B, B]));

        let resolution = execute_placement(&mut state, PlayerId::Second, at, 5).unwrap();

        assert_eq!(resolution, Resolution { reserved: 0, captured: 1 });
        assert_eq!(state.reserve_count(PlayerId::Second), 0);
        assert_eq!(state.capture_count(PlayerId::Second), 1);
        assert_eq!(state.board[at].count_owned_by(PlayerId::First), 0);
    }

    #[test]
    fn test_off_board_coordinates_do_not_mutate() {
        let mut state = new_state();
        state.reserves[PlayerId::First] = 1;
        let before = state.clone();

        let off_start = Move::new((-1, 0), (0, 0), 1);
        let off_end = Move::new((0, 5), (0, 6), 1);

        assert_eq!(
            execute_move(&mut state, PlayerId::First, &off_start, 5),
            Err(FocusError::OutOfBounds)
        );
        assert_eq!(
            execute_move(&mut state, PlayerId::First, &off_end, 5),
            Err(FocusError::OutOfBounds)
        );
        assert_eq!(
            execute_placement(&mut state, PlayerId::First, Coord::new(6, 0), 5),
            Err(FocusError::OutOfBounds)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_placement_without_reserve() {
        let mut state = new_state();
        let before = state.clone();

        let result = execute_placement(&mut state, PlayerId::First, Coord::new(0, 0), 5);

        assert_eq!(result, Err(FocusError::NoReserve));
        assert_eq!(state, before);
    }
}
