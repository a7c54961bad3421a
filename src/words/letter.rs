//! Validated guess letters.
//!
//! A `Letter` is always one uppercase ASCII letter. Raw key input from the
//! presentation layer goes through `Letter::parse`, which tells apart the
//! three ways a key can fail to be a letter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw input could not be used as a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum InvalidInputReason {
    /// Nothing was entered.
    #[error("no key was entered")]
    Empty,
    /// A single character that is not an ASCII letter ("3", "!", "é").
    #[error("not a letter")]
    NotALetter,
    /// A multi-character key name such as "Enter" or "Shift".
    #[error("forbidden key")]
    TooLong,
}

/// A single uppercase ASCII letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Convert a character, case-insensitively.
    ///
    /// ```
    /// use poke_hangman::words::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').map(Letter::as_char), Some('Q'));
    /// assert_eq!(Letter::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse raw key input into a letter.
    pub fn parse(input: &str) -> Result<Self, InvalidInputReason> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InvalidInputReason::Empty),
            (Some(c), None) => Self::from_char(c).ok_or(InvalidInputReason::NotALetter),
            (Some(_), Some(_)) => Err(InvalidInputReason::TooLong),
        }
    }

    /// The uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidInputReason;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(InvalidInputReason::NotALetter)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
