//! `RulesEngine` implementation for Focus.

use crate::core::{Action, ActionRecord, Coord, FocusError, GameState, Move, PlayerId, RulesConfig};
use crate::rules::turn;
use crate::rules::{executor, validator, GameResult, MoveOutcome, RulesEngine};

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Focus rules parameterized by a `RulesConfig`.
#[derive(Clone, Debug, Default)]
pub struct FocusRules {
    config: RulesConfig,
}

impl FocusRules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Every on-board move from `start` whose distance matches its count.
    fn moves_from(start: Coord, height: usize) -> impl Iterator<Item = Move> {
        (1..=height).flat_map(move |count| {
            let step = count as i32;
            DIRECTIONS.into_iter().filter_map(move |(d_row, d_col)| {
                let end = start.offset(d_row * step, d_col * step);
                end.in_bounds().then(|| Move::new(start, end, count))
            })
        })
    }
}

impl RulesEngine for FocusRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<(), FocusError> {
        turn::ensure_in_progress(state, self.config.captures_to_win)?;

        match action {
            Action::Move(mv) => validator::validate_move(state, player, mv),
            Action::PlaceReserve { location } => validator::validate_placement(state, player, *location),
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<MoveOutcome, FocusError> {
        self.validate(state, player, action)?;

        let max_height = self.config.max_stack_height;
        let resolution = match action {
            Action::Move(mv) => executor::execute_move(state, player, mv, max_height)?,
            Action::PlaceReserve { location } => {
                executor::execute_placement(state, player, *location, max_height)?
            }
        };

        let record = ActionRecord::new(player, *action, state.turn_number);
        state.record_action(record);
        turn::advance_turn(state);

        let winner = turn::record_winner(state, self.config.captures_to_win);
        Ok(MoveOutcome { resolution, winner })
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        turn::check_winner(state, self.config.captures_to_win).map(GameResult::Winner)
    }

    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions: Vec<Action> = state
            .board()
            .cells()
            .filter(|(_, stack)| stack.top().is_some_and(|piece| piece.is_owned_by(player)))
            .flat_map(|(start, stack)| Self::moves_from(start, stack.len()))
            .map(Action::Move)
            .collect();

        if state.reserve_count(player) > 0 {
            actions.extend(Coord::all().map(|location| Action::PlaceReserve { location }));
        }

        actions
    }
}
