//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats of a match.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerId`. Used for sessions,
//! scores, and display names so the two players never live in separate
//! hand-written copies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The first player (left board).
    One,
    /// The second player (right board).
    Two,
}

impl PlayerId {
    /// Both seats, in order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the 0-based index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Get the 1-based seat number shown to players.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Look up a seat by its 1-based number.
    ///
    /// ```
    /// use poke_hangman::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::Two));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage for exactly two players.
///
/// ## Example
///
/// ```
/// use poke_hangman::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::with_value(0);
/// scores[PlayerId::Two] += 1;
///
/// assert_eq!(scores[PlayerId::One], 0);
/// assert_eq!(scores[PlayerId::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a new pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a pair from explicit values for player one and player two.
    pub fn from_values(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_values(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
