//! Focus game facade.

use im::Vector;

use super::rules::FocusRules;
use crate::board::Board;
use crate::core::{
    Action, ActionRecord, Coord, FocusError, GameState, Move, Piece, PlayerId, PlayerMap,
    PlayerProfile, RulesConfig, SetupError, TOTAL_PIECES,
};
use crate::rules::{turn, GameResult, MoveOutcome, RulesEngine};

/// A game of Focus in progress.
///
/// Owns the rules and the state; every change goes through
/// [`attempt_move`](Self::attempt_move) or
/// [`place_from_reserve`](Self::place_from_reserve).
///
/// ## Example
///
/// ```
/// use focus_engine::games::focus::FocusGame;
/// use focus_engine::core::PlayerId;
///
/// let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
///
/// game.attempt_move(PlayerId::First, (0, 1), (0, 2), 1).unwrap();
///
/// let symbols: Vec<char> = game
///     .stack_contents((0, 2))
///     .unwrap()
///     .into_iter()
///     .map(|piece| game.symbol_of(piece))
///     .collect();
/// assert_eq!(symbols, vec!['R', 'G']);
/// assert_eq!(game.current_turn(), PlayerId::Second);
/// ```
#[derive(Clone, Debug)]
pub struct FocusGame {
    rules: FocusRules,
    state: GameState,
}

/// Builder for creating a FocusGame.
///
/// Defaults to the standard opening with players "PlayerA" (`R`) and
/// "PlayerB" (`G`). A custom position must still account for every piece.
pub struct FocusGameBuilder {
    first: PlayerProfile,
    second: PlayerProfile,
    config: RulesConfig,
    board: Option<Board>,
    reserves: PlayerMap<u32>,
    captures: PlayerMap<u32>,
    to_move: PlayerId,
}

impl Default for FocusGameBuilder {
    fn default() -> Self {
        Self {
            first: PlayerProfile::new("PlayerA", 'R'),
            second: PlayerProfile::new("PlayerB", 'G'),
            config: RulesConfig::default(),
            board: None,
            reserves: PlayerMap::with_value(0),
            captures: PlayerMap::with_value(0),
            to_move: PlayerId::First,
        }
    }
}

impl FocusGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and symbol of the player who moves first.
    pub fn first_player(mut self, name: impl Into<String>, symbol: char) -> Self {
        self.first = PlayerProfile::new(name, symbol);
        self
    }

    pub fn second_player(mut self, name: impl Into<String>, symbol: char) -> Self {
        self.second = PlayerProfile::new(name, symbol);
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a custom board instead of the opening layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn reserves(mut self, player: PlayerId, count: u32) -> Self {
        self.reserves[player] = count;
        self
    }

    pub fn captures(mut self, player: PlayerId, count: u32) -> Self {
        self.captures[player] = count;
        self
    }

    pub fn to_move(mut self, player: PlayerId) -> Self {
        self.to_move = player;
        self
    }

    /// Build the game.
    ///
    /// Fails on duplicate names or symbols, an unplayable config, a stack
    /// above the height limit, or a position that does not account for
    /// exactly [`TOTAL_PIECES`] pieces.
    pub fn build(self) -> Result<FocusGame, SetupError> {
        self.config.validate()?;
        if self.first.name == self.second.name {
            return Err(SetupError::DuplicateName(self.first.name));
        }
        if self.first.symbol == self.second.symbol {
            return Err(SetupError::DuplicateSymbol(self.first.symbol));
        }

        let board = self.board.unwrap_or_else(Board::initial);
        if let Some((at, _)) = board
            .cells()
            .find(|(_, stack)| stack.len() > self.config.max_stack_height)
        {
            return Err(SetupError::StackTooTall(at));
        }

        let mut state = GameState::with_board(self.first, self.second, board);
        state.reserves = self.reserves;
        state.captures = self.captures;
        state.current_turn = self.to_move;

        let found = state.total_pieces();
        if found != TOTAL_PIECES {
            return Err(SetupError::PieceCountMismatch {
                expected: TOTAL_PIECES,
                found,
            });
        }

        turn::record_winner(&mut state, self.config.captures_to_win);

        Ok(FocusGame {
            rules: FocusRules::new(self.config),
            state,
        })
    }
}

impl FocusGame {
    /// Standard game between two `(name, symbol)` players; the first moves first.
    pub fn new(
        first: (impl Into<String>, char),
        second: (impl Into<String>, char),
    ) -> Result<Self, SetupError> {
        FocusGameBuilder::new()
            .first_player(first.0, first.1)
            .second_player(second.0, second.1)
            .build()
    }

    pub fn builder() -> FocusGameBuilder {
        FocusGameBuilder::new()
    }

    // === Commands ===

    /// Move the top `count` pieces at `start` exactly `count` cells to `end`.
    pub fn attempt_move(
        &mut self,
        player: PlayerId,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, FocusError> {
        self.apply(player, &Action::Move(Move::new(start, end, count)))
    }

    /// Put one of `player`'s reserved pieces on top of `location`.
    pub fn place_from_reserve(
        &mut self,
        player: PlayerId,
        location: impl Into<Coord>,
    ) -> Result<MoveOutcome, FocusError> {
        self.apply(
            player,
            &Action::PlaceReserve {
                location: location.into(),
            },
        )
    }

    /// Apply either kind of action.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<MoveOutcome, FocusError> {
        self.rules.apply_action(&mut self.state, player, action)
    }

    // === Queries ===

    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.state.current_turn()
    }

    /// Pieces at `location`, top of the stack first.
    pub fn stack_contents(&self, location: impl Into<Coord>) -> Result<Vec<Piece>, FocusError> {
        let stack = self
            .state
            .stack_at(location.into())
            .ok_or(FocusError::OutOfBounds)?;
        Ok(stack.iter_top_down().collect())
    }

    pub fn stack_size(&self, location: impl Into<Coord>) -> Result<usize, FocusError> {
        self.state
            .stack_at(location.into())
            .map(|stack| stack.len())
            .ok_or(FocusError::OutOfBounds)
    }

    #[must_use]
    pub fn reserve_count(&self, player: PlayerId) -> u32 {
        self.state.reserve_count(player)
    }

    #[must_use]
    pub fn capture_count(&self, player: PlayerId) -> u32 {
        self.state.capture_count(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Every stack move `player` could legally make right now.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        self.legal_actions(player)
            .into_iter()
            .filter_map(|action| match action {
                Action::Move(mv) => Some(mv),
                Action::PlaceReserve { .. } => None,
            })
            .collect()
    }

    /// Every move or placement `player` could legally make right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.rules.legal_actions(&self.state, player)
    }

    // === Players ===

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        self.state.player_by_name(name)
    }

    #[must_use]
    pub fn profile(&self, player: PlayerId) -> &PlayerProfile {
        self.state.profile(player)
    }

    /// Display symbol of the piece's owner.
    #[must_use]
    pub fn symbol_of(&self, piece: Piece) -> char {
        self.state.profile(piece.owner).symbol
    }

    // === Inspection ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        self.state.history()
    }

    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.state.total_pieces()
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        self.rules.config()
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
