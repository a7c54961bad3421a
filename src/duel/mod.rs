//! Two-player match: sessions, gating, scores, and round transitions.
//!
//! `MatchController` is the only type the presentation layer has to drive.
//! It exposes three inputs (`submit_letter`, `start_round`/`continue_round`,
//! `full_reset`) and renders out through `MatchSnapshot`.

pub mod controller;
pub mod snapshot;

pub use controller::{MatchController, MatchError};
pub use snapshot::{MatchSnapshot, PlayerSnapshot};
