//! Immutable word list targets are drawn from.

use tracing::trace;

use super::Word;
use crate::core::{ConfigError, GameRng};

/// The starter Pokémon of every generation, the default word list.
pub const STARTER_POKEMON: [&str; 27] = [
    "Bulbasaur", "Charmander", "Squirtle",
    "Chikorita", "Cyndaquil", "Totodile",
    "Treecko", "Torchic", "Mudkip",
    "Turtwig", "Chimchar", "Piplup",
    "Snivy", "Tepig", "Oshawott",
    "Chespin", "Fennekin", "Froakie",
    "Rowlet", "Litten", "Popplio",
    "Grookey", "Scorbunny", "Sobble",
    "Sprigatito", "Fuecoco", "Quaxly",
];

/// Validated, non-empty list of candidate words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Build a bank, validating every entry.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Word::parse(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }

        Ok(Self { words })
    }

    /// The default starter Pokémon list.
    #[must_use]
    pub fn starters() -> Self {
        Self {
            words: STARTER_POKEMON
                .iter()
                .filter_map(|w| Word::parse(w).ok())
                .collect(),
        }
    }

    /// Pick one word uniformly at random, with replacement.
    pub fn pick_word(&self, rng: &mut GameRng) -> &Word {
        let idx = rng.gen_range_usize(0..self.words.len());
        trace!(idx, "picked word index");
        &self.words[idx]
    }

    /// All words in configured order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty bank cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is the word in the bank? Case-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::parse(word).map_or(false, |w| self.words.contains(&w))
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::starters()
    }
}
