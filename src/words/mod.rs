//! Letters, words, and the word bank.
//!
//! - `Letter`: validated guess input
//! - `Word`: validated uppercase target
//! - `WordBank`: non-empty list with uniform random selection

pub mod letter;
pub mod word;
pub mod bank;

pub use letter::{InvalidInputReason, Letter};
pub use word::Word;
pub use bank::{WordBank, STARTER_POKEMON};
