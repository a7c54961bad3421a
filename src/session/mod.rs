//! Per-player guessing state machine.
//!
//! A `GuessingSession` owns one player's target word, mask, lives, and
//! guess history for a round. Both players use the same type.

pub mod outcome;
pub mod guessing;

pub use outcome::{Guess, GuessError, Outcome, SubmissionResult};
pub use guessing::{GuessingSession, SessionSnapshot, PLACEHOLDER};
