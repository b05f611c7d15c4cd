//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Focus is strictly a two-player game, so players are a closed enum
//! rather than a free-form name or an open-ended index.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
///
/// `First` is the player listed first at game creation and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Get the slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Iterate over both players in seating order.
    ///
    /// ```
    /// use focus_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::First, PlayerId::Second]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::First, PlayerId::Second].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::First => write!(f, "Player 1"),
            PlayerId::Second => write!(f, "Player 2"),
        }
    }
}

/// Name and piece symbol a caller registered for a seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub symbol: char,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// Per-player data storage, one slot per seat.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[PlayerId::Second] += 2;
///
/// assert_eq!(captures[PlayerId::First], 0);
/// assert_eq!(captures[PlayerId::Second], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::First), factory(PlayerId::Second)],
        }
    }

    /// Create a new PlayerMap from the first and second seat's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
