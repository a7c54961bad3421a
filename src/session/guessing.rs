//! One player's round of letter guessing.
//!
//! ```text
//! InProgress ──hit, mask complete──▶ Won
//!     │
//!     └────────miss, lives == 0────▶ Lost
//! ```
//!
//! Terminal states are final. The next round calls `start` with a new word.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::{Guess, GuessError, Outcome, SubmissionResult};
use crate::words::word::WORD_INLINE;
use crate::words::{Letter, Word};

/// Character shown for unrevealed positions.
pub const PLACEHOLDER: char = '_';

/// One player's guessing state for the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessingSession {
    target: Word,
    mask: SmallVec<[Option<Letter>; WORD_INLINE]>,
    guessed: SmallVec<[Letter; 26]>,
    max_lives: u8,
    lives_remaining: u8,
    outcome: Outcome,
}

impl GuessingSession {
    /// Create a session already started on `word`.
    ///
    /// `max_lives` below 1 is raised to 1 so every session can record a miss.
    #[must_use]
    pub fn new(word: &Word, max_lives: u8) -> Self {
        let max_lives = max_lives.max(1);
        let mut session = Self {
            target: word.clone(),
            mask: SmallVec::new(),
            guessed: SmallVec::new(),
            max_lives,
            lives_remaining: max_lives,
            outcome: Outcome::InProgress,
        };
        session.start(word);
        session
    }

    /// Begin a fresh round on `word`: all placeholders, full lives, no history.
    pub fn start(&mut self, word: &Word) {
        self.target = word.clone();
        self.mask = SmallVec::from_elem(None, word.len());
        self.guessed.clear();
        self.lives_remaining = self.max_lives;
        self.outcome = Outcome::InProgress;
    }

    /// Submit raw key input.
    ///
    /// Checks run in order: input validity, open session, duplicate letter.
    /// A rejected submission leaves the session untouched.
    pub fn submit_letter(&mut self, input: &str) -> Result<SubmissionResult, GuessError> {
        let letter = Letter::parse(input).map_err(|reason| {
            trace!(input, %reason, "rejected input");
            GuessError::InvalidInput(reason)
        })?;
        self.submit(letter)
    }

    /// Submit an already validated letter.
    pub fn submit(&mut self, letter: Letter) -> Result<SubmissionResult, GuessError> {
        if self.outcome.is_terminal() {
            trace!(%letter, "session closed");
            return Err(GuessError::SessionClosed);
        }
        if self.guessed.contains(&letter) {
            trace!(%letter, "duplicate guess");
            return Err(GuessError::DuplicateGuess(letter));
        }

        self.guessed.push(letter);

        let guess = if self.target.contains(letter) {
            for (slot, &actual) in self.mask.iter_mut().zip(self.target.letters()) {
                if actual == letter {
                    *slot = Some(letter);
                }
            }
            if self.is_solved() {
                self.outcome = Outcome::Won;
            }
            Guess::Hit
        } else {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            if self.lives_remaining == 0 {
                self.outcome = Outcome::Lost;
            }
            Guess::Miss
        };

        Ok(SubmissionResult {
            letter,
            guess,
            mask: self.mask_string(),
            lives_remaining: self.lives_remaining,
            outcome: self.outcome,
        })
    }

    fn is_solved(&self) -> bool {
        self.mask.iter().all(Option::is_some)
    }

    /// The word being guessed.
    #[must_use]
    pub fn target_word(&self) -> &Word {
        &self.target
    }

    /// Mask slots: `Some` once revealed.
    #[must_use]
    pub fn mask(&self) -> &[Option<Letter>] {
        &self.mask
    }

    /// Mask rendered with `_` placeholders, e.g. `S_UI__LE`.
    #[must_use]
    pub fn mask_string(&self) -> String {
        self.mask
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char))
            .collect()
    }

    /// Letters submitted this round, oldest first.
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    /// Number of accepted submissions this round.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guessed.len()
    }

    /// Misses left before the session is lost.
    #[must_use]
    pub fn lives_remaining(&self) -> u8 {
        self.lives_remaining
    }

    /// Lives each round starts with.
    #[must_use]
    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    /// Misses so far this round.
    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.max_lives - self.lives_remaining
    }

    /// Index of the hangman drawing to show.
    ///
    /// `None` before the first miss (the starting picture), then
    /// `0..max_lives` with one step per miss.
    #[must_use]
    pub fn hangman_stage(&self) -> Option<u8> {
        self.wrong_guesses().checked_sub(1)
    }

    /// Whether the round is still running, won or lost.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mask: self.mask_string(),
            guessed_letters: self.guessed.to_vec(),
            lives_remaining: self.lives_remaining,
            max_lives: self.max_lives,
            outcome: self.outcome,
            hangman_stage: self.hangman_stage(),
            revealed_word: self
                .outcome
                .is_terminal()
                .then(|| self.target.to_string()),
        }
    }
}

/// Serializable view of a session.
///
/// The target word is only included once the session is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mask: String,
    pub guessed_letters: Vec<Letter>,
    pub lives_remaining: u8,
    pub max_lives: u8,
    pub outcome: Outcome,
    pub hangman_stage: Option<u8>,
    pub revealed_word: Option<String>,
}
