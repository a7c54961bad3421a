//! Match configuration.
//!
//! The presentation layer supplies a `MatchConfig` at startup:
//! - the word list targets are drawn from
//! - how many lives each player starts a round with
//! - an optional RNG seed for reproducible matches
//! - the two display names
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! JSON. Missing JSON fields take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PlayerId;
use crate::words::STARTER_POKEMON;

/// Lives per player per round unless configured otherwise.
pub const STARTING_LIVES: u8 = 10;

/// Upper bound for `starting_lives`: one life per letter of the alphabet.
pub const MAX_STARTING_LIVES: u8 = 26;

/// Names used when a player leaves the name field blank.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Trainer 1", "Trainer 2"];

/// Configuration problems. These are deployment bugs, not player mistakes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The word list has no entries.
    #[error("word bank is empty")]
    EmptyWordBank,

    /// A word list entry is empty or contains non-letters.
    #[error("invalid word {0:?}: words must be non-empty and contain only ASCII letters")]
    InvalidWord(String),

    /// `starting_lives` is outside `1..=26`.
    #[error("starting lives must be between 1 and 26, got {0}")]
    InvalidLives(u8),

    /// The JSON document could not be parsed.
    #[error("failed to parse match config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Candidate target words.
    pub words: Vec<String>,

    /// Lives at the start of every round.
    pub starting_lives: u8,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Display names for player one and player two.
    pub player_names: [String; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            words: STARTER_POKEMON.iter().map(|w| (*w).to_string()).collect(),
            starting_lives: STARTING_LIVES,
            seed: None,
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the default starter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the word list.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the lives each round starts with.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set both display names.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }

    /// Check everything except the word list, which `WordBank::new` validates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_STARTING_LIVES).contains(&self.starting_lives) {
            return Err(ConfigError::InvalidLives(self.starting_lives));
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        Ok(())
    }

    /// Display name for a player, falling back to "Trainer N" when blank.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        let name = self.player_names[player.index()].trim();
        if name.is_empty() {
            DEFAULT_PLAYER_NAMES[player.index()]
        } else {
            name
        }
    }
}
