//! Submission results and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::words::{InvalidInputReason, Letter};

/// Round state of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still guessing.
    #[default]
    InProgress,
    /// Every letter revealed.
    Won,
    /// Out of lives.
    Lost,
}

impl Outcome {
    /// Won or Lost. No submissions are accepted in a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Classification of an accepted letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    /// The letter occurs in the target and was revealed.
    Hit,
    /// The letter is not in the target; one life was lost.
    Miss,
}

/// Everything the presentation layer needs after an accepted letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// The normalized letter.
    pub letter: Letter,
    /// Hit or miss.
    pub guess: Guess,
    /// Mask after the update, placeholders as `_`.
    pub mask: String,
    /// Lives after the update.
    pub lives_remaining: u8,
    /// Outcome after the update.
    pub outcome: Outcome,
}

/// A rejected submission. The session is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The input was not a single letter.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputReason),

    /// The letter was already submitted this round.
    #[error("letter {0} was already guessed")]
    DuplicateGuess(Letter),

    /// The session already won or lost; a new round must start first.
    #[error("session is over; start a new round")]
    SessionClosed,
}
