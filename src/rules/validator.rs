//! Legality checks for moves and reserve placements.
//!
//! Checks run in a fixed order and stop at the first failure, so the
//! error a caller sees is always the earliest rule the action breaks.
//! Nothing here mutates state.

use crate::board::PieceStack;
use crate::core::{Coord, FocusError, GameState, Move, PlayerId};

/// Check a stack move for `player`.
///
/// Order: turn, alignment, distance, bounds, controller, piece count.
pub fn validate_move(state: &GameState, player: PlayerId, mv: &Move) -> Result<(), FocusError> {
    check_turn(state, player)?;
    // Only off-board endpoints can be far enough apart to overflow.
    let (d_row, d_col) = mv.deltas().ok_or(FocusError::OutOfBounds)?;
    check_alignment(d_row, d_col)?;
    check_distance(d_row, d_col, mv.count)?;
    check_bounds(mv.start)?;
    check_bounds(mv.end)?;

    let stack = &state.board[mv.start];
    check_controller(stack, player)?;
    check_piece_count(stack, mv.count)
}

/// Check a reserve placement for `player`.
///
/// Order: turn, bounds, reserve available.
pub fn validate_placement(
    state: &GameState,
    player: PlayerId,
    location: Coord,
) -> Result<(), FocusError> {
    check_turn(state, player)?;
    check_bounds(location)?;
    if state.reserves[player] == 0 {
        return Err(FocusError::NoReserve);
    }
    Ok(())
}

fn check_turn(state: &GameState, player: PlayerId) -> Result<(), FocusError> {
    if state.current_turn != player {
        return Err(FocusError::NotPlayersTurn);
    }
    Ok(())
}

/// Exactly one of the two deltas must be nonzero.
fn check_alignment(d_row: i32, d_col: i32) -> Result<(), FocusError> {
    if (d_row == 0) == (d_col == 0) {
        return Err(FocusError::InvalidAlignment);
    }
    Ok(())
}

/// Moving N pieces travels exactly N cells.
fn check_distance(d_row: i32, d_col: i32, count: usize) -> Result<(), FocusError> {
    let distance = u64::from(d_row.unsigned_abs()) + u64::from(d_col.unsigned_abs());
    if distance != count as u64 {
        return Err(FocusError::DistanceMismatch);
    }
    Ok(())
}

fn check_bounds(at: Coord) -> Result<(), FocusError> {
    if !at.in_bounds() {
        return Err(FocusError::OutOfBounds);
    }
    Ok(())
}

/// An empty stack has no controller, so nobody may move from it.
fn check_controller(stack: &PieceStack, player: PlayerId) -> Result<(), FocusError> {
    match stack.top() {
        Some(piece) if piece.is_owned_by(player) => Ok(()),
        _ => Err(FocusError::WrongController),
    }
}

fn check_piece_count(stack: &PieceStack, count: usize) -> Result<(), FocusError> {
    if stack.len() < count {
        return Err(FocusError::InsufficientPieces);
    }
    Ok(())
}
