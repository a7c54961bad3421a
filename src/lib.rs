//! # poke-hangman
//!
//! Game core for a two-player Pokémon hangman.
//!
//! ## Design Principles
//!
//! 1. **No globals**: both players are explicit `GuessingSession` values
//!    owned by a `MatchController`.
//!
//! 2. **State out, not drawing out**: every operation returns a result or a
//!    snapshot. Rendering lives entirely in the caller.
//!
//! 3. **One session type**: player one and player two run the same code,
//!    indexed by `PlayerId`.
//!
//! ## Architecture
//!
//! - **Soft alternation**: either player may guess while counts are equal;
//!   whoever gets ahead waits. See `turns`.
//!
//! - **Single lives counter**: the hangman stage is derived from lives,
//!   never tracked separately.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration
//! - `words`: Letters, words, word bank
//! - `session`: Per-player guessing state machine
//! - `turns`: Input gating between the two players
//! - `duel`: Match controller, scores, snapshots

pub mod core;
pub mod words;
pub mod session;
pub mod turns;
pub mod duel;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, MatchConfig, PlayerId, PlayerPair, STARTING_LIVES,
};

pub use crate::words::{InvalidInputReason, Letter, Word, WordBank, STARTER_POKEMON};

pub use crate::session::{
    Guess, GuessError, GuessingSession, Outcome, SessionSnapshot, SubmissionResult, PLACEHOLDER,
};

pub use crate::turns::{Gates, TurnCoordinator};

pub use crate::duel::{MatchController, MatchError, MatchSnapshot, PlayerSnapshot};
