//! Target words.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Letter;
use crate::core::ConfigError;

/// Inline capacity for word letters. Every starter name fits.
pub(crate) const WORD_INLINE: usize = 12;

/// A non-empty uppercase word made of ASCII letters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: SmallVec<[Letter; WORD_INLINE]>,
}

impl Word {
    /// Validate and uppercase a word.
    ///
    /// ```
    /// use poke_hangman::words::Word;
    ///
    /// let word = Word::parse("Mudkip").unwrap();
    /// assert_eq!(word.to_string(), "MUDKIP");
    /// assert!(Word::parse("Mr. Mime").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let letters: Option<SmallVec<[Letter; WORD_INLINE]>> =
            raw.chars().map(Letter::from_char).collect();
        match letters {
            Some(letters) if !letters.is_empty() => Ok(Self { letters }),
            _ => Err(ConfigError::InvalidWord(raw.to_string())),
        }
    }

    /// The letters in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Does the letter occur anywhere in the word?
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl TryFrom<String> for Word {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
