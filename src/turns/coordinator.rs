//! Soft turn alternation between the two sessions.
//!
//! Players may guess in any order while their guess counts are equal.
//! Whoever gets ahead is locked until the other catches up, so neither
//! player can ever lead by two guesses.
//!
//! Terminal sessions override the count rule:
//! - a win closes both inputs until the next round;
//! - a loss closes the loser's input only;
//! - a player whose opponent lost may keep guessing, since the opponent
//!   can never catch up.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::session::{GuessingSession, Outcome};

/// Which input channels currently accept submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gates {
    pub p1_enabled: bool,
    pub p2_enabled: bool,
}

impl Gates {
    /// Both inputs open, as at round start.
    pub const OPEN: Gates = Gates {
        p1_enabled: true,
        p2_enabled: true,
    };

    /// Both inputs closed.
    pub const CLOSED: Gates = Gates {
        p1_enabled: false,
        p2_enabled: false,
    };

    #[must_use]
    pub fn is_open(&self, player: PlayerId) -> bool {
        match player {
            PlayerId::One => self.p1_enabled,
            PlayerId::Two => self.p2_enabled,
        }
    }

    /// Players whose input is open.
    pub fn open_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all().filter(move |&p| self.is_open(p))
    }
}

impl Default for Gates {
    fn default() -> Self {
        Self::OPEN
    }
}

/// Derives gate state from the two sessions. Holds no state of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnCoordinator;

impl TurnCoordinator {
    /// Gates from guess counts alone.
    #[must_use]
    pub fn lockstep(count1: usize, count2: usize) -> Gates {
        Gates {
            p1_enabled: count1 <= count2,
            p2_enabled: count2 <= count1,
        }
    }

    /// Gates for the current state of both sessions.
    #[must_use]
    pub fn compute_gates(session1: &GuessingSession, session2: &GuessingSession) -> Gates {
        let (o1, o2) = (session1.outcome(), session2.outcome());

        if o1 == Outcome::Won || o2 == Outcome::Won {
            return Gates::CLOSED;
        }

        match (o1, o2) {
            (Outcome::Lost, Outcome::Lost) => Gates::CLOSED,
            (Outcome::Lost, _) => Gates {
                p1_enabled: false,
                p2_enabled: true,
            },
            (_, Outcome::Lost) => Gates {
                p1_enabled: true,
                p2_enabled: false,
            },
            _ => Self::lockstep(session1.guess_count(), session2.guess_count()),
        }
    }
}
