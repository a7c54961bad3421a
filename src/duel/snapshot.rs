//! Serializable match views for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::PlayerPair;
use crate::session::SessionSnapshot;
use crate::turns::Gates;

/// One player's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u32,
    pub input_enabled: bool,
    pub session: SessionSnapshot,
}

/// Full match state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub round: u32,
    pub players: PlayerPair<PlayerSnapshot>,
    pub gates: Gates,
    /// Whether the "continue" action is available.
    pub can_continue: bool,
}
