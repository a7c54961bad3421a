//! Core types: players, RNG, configuration.
//!
//! Nothing in here knows about words or guesses; the game modules build
//! on these pieces.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{ConfigError, MatchConfig, DEFAULT_PLAYER_NAMES, MAX_STARTING_LIVES, STARTING_LIVES};
