//! Match orchestration: two sessions, gating, scores, round transitions.

use thiserror::Error;
use tracing::{debug, info, trace};

use super::{MatchSnapshot, PlayerSnapshot};
use crate::core::{ConfigError, GameRng, MatchConfig, PlayerId, PlayerPair};
use crate::session::{GuessError, GuessingSession, Outcome, SubmissionResult};
use crate::turns::{Gates, TurnCoordinator};
use crate::words::{Letter, WordBank};

/// A submission or round action the match refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The session itself rejected the letter.
    #[error(transparent)]
    Guess(#[from] GuessError),

    /// The player's input channel is closed right now.
    #[error("input for {0} is locked")]
    InputLocked(PlayerId),

    /// "Continue" was requested while both sessions are still playing.
    #[error("round is still in progress")]
    RoundInProgress,
}

/// Owns both players' sessions and the cumulative score.
///
/// ## Example
///
/// ```
/// use poke_hangman::{MatchConfig, MatchController, Outcome, PlayerId};
///
/// let config = MatchConfig::new().with_words(["Eevee"]).with_seed(1);
/// let mut game = MatchController::new(config).unwrap();
///
/// game.submit_letter(PlayerId::One, "e").unwrap();
/// game.submit_letter(PlayerId::Two, "x").unwrap();
/// game.submit_letter(PlayerId::One, "v").unwrap();
///
/// assert_eq!(game.session(PlayerId::One).outcome(), Outcome::Won);
/// assert_eq!(game.score(PlayerId::One), 1);
/// assert!(game.can_continue());
/// assert!(game.submit_letter(PlayerId::Two, "e").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MatchController {
    config: MatchConfig,
    bank: WordBank,
    rng: GameRng,
    sessions: PlayerPair<GuessingSession>,
    scores: PlayerPair<u32>,
    gates: Gates,
    round: u32,
}

impl MatchController {
    /// Validate the config and deal the first round.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bank = WordBank::new(&config.words)?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let lives = config.starting_lives;

        info!(seed = rng.seed(), words = bank.len(), lives, "match created");

        let sessions = PlayerPair::new(|_| GuessingSession::new(bank.pick_word(&mut rng), lives));

        let controller = Self {
            config,
            bank,
            rng,
            sessions,
            scores: PlayerPair::with_value(0),
            gates: Gates::OPEN,
            round: 1,
        };
        controller.log_round_start();
        Ok(controller)
    }

    /// Deal new words to both players and reopen both inputs.
    ///
    /// Scores are kept. May be called at any time; use `continue_round`
    /// for the guarded "continue" action.
    pub fn start_round(&mut self) {
        let Self { bank, rng, sessions, .. } = self;
        for (_, session) in sessions.iter_mut() {
            session.start(bank.pick_word(rng));
        }
        self.gates = Gates::OPEN;
        self.round += 1;
        self.log_round_start();
    }

    /// Zero both scores, then start a new round.
    pub fn full_reset(&mut self) {
        self.scores = PlayerPair::with_value(0);
        self.round = 0;
        info!("match reset");
        self.start_round();
    }

    /// Start the next round once at least one session is over.
    pub fn continue_round(&mut self) -> Result<(), MatchError> {
        if !self.can_continue() {
            return Err(MatchError::RoundInProgress);
        }
        self.start_round();
        Ok(())
    }

    /// Route a key press to a player's session.
    ///
    /// Checks run in order: input validity, the player's own session being
    /// open (`SessionClosed`), their gate (`InputLocked`), then duplicates.
    /// Accepted guesses update scores and gates.
    pub fn submit_letter(
        &mut self,
        player: PlayerId,
        input: &str,
    ) -> Result<SubmissionResult, MatchError> {
        let letter = Letter::parse(input).map_err(|reason| {
            trace!(%player, input, %reason, "rejected input");
            GuessError::InvalidInput(reason)
        })?;
        if self.sessions[player].outcome().is_terminal() {
            trace!(%player, "submission after round end");
            return Err(GuessError::SessionClosed.into());
        }
        if !self.gates.is_open(player) {
            trace!(%player, "input locked");
            return Err(MatchError::InputLocked(player));
        }

        let result = self.sessions[player].submit(letter)?;
        debug!(
            %player,
            letter = %result.letter,
            guess = ?result.guess,
            mask = %result.mask,
            lives = result.lives_remaining,
            "guess accepted"
        );

        match result.outcome {
            Outcome::Won => self.on_session_won(player),
            Outcome::Lost => self.on_session_lost(player),
            Outcome::InProgress => {}
        }

        self.recompute_gates();
        Ok(result)
    }

    fn on_session_won(&mut self, player: PlayerId) {
        self.scores[player] += 1;
        info!(
            %player,
            word = %self.sessions[player].target_word(),
            score = self.scores[player],
            "session won"
        );
    }

    fn on_session_lost(&self, player: PlayerId) {
        info!(%player, word = %self.sessions[player].target_word(), "session lost");
    }

    fn recompute_gates(&mut self) {
        let gates = TurnCoordinator::compute_gates(
            &self.sessions[PlayerId::One],
            &self.sessions[PlayerId::Two],
        );
        if gates != self.gates {
            debug!(p1 = gates.p1_enabled, p2 = gates.p2_enabled, "gates changed");
        }
        self.gates = gates;
    }

    fn log_round_start(&self) {
        info!(round = self.round, "round started");
        for (player, session) in self.sessions.iter() {
            debug!(%player, word = %session.target_word(), "word picked");
        }
    }

    /// True once at least one session has won or lost.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.sessions.iter().any(|(_, s)| s.outcome().is_terminal())
    }

    /// A player's current guessing session.
    #[must_use]
    pub fn session(&self, player: PlayerId) -> &GuessingSession {
        &self.sessions[player]
    }

    /// Rounds this player has won since the last reset.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerPair<u32> {
        &self.scores
    }

    /// Which players may submit right now.
    #[must_use]
    pub fn gates(&self) -> Gates {
        self.gates
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Display name, "Trainer N" when none was configured.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.config.player_name(player)
    }

    /// Seed the word sequence was drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Words each round is dealt from.
    #[must_use]
    pub fn word_bank(&self) -> &WordBank {
        &self.bank
    }

    /// The validated configuration this match was built from.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Everything the presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            round: self.round,
            players: PlayerPair::new(|player| PlayerSnapshot {
                name: self.player_name(player).to_string(),
                score: self.scores[player],
                input_enabled: self.gates.is_open(player),
                session: self.sessions[player].snapshot(),
            }),
            gates: self.gates,
            can_continue: self.can_continue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(words: &[&str]) -> MatchController {
        MatchController::new(MatchConfig::new().with_words(words.iter().copied()).with_seed(42))
            .unwrap()
    }

    #[test]
    fn test_new_deals_round_one() {
        let game = controller(&["Piplup"]);
        assert_eq!(game.round(), 1);
        assert_eq!(game.gates(), Gates::OPEN);
        assert!(!game.can_continue());
        for player in PlayerId::all() {
            assert_eq!(game.session(player).mask_string(), "______");
            assert_eq!(game.score(player), 0);
        }
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let empty = MatchConfig::new().with_words(Vec::<String>::new());
        assert!(matches!(MatchController::new(empty), Err(ConfigError::EmptyWordBank)));

        let bad_word = MatchConfig::new().with_words(["Nidoran♀"]);
        assert!(matches!(MatchController::new(bad_word), Err(ConfigError::InvalidWord(_))));
    }

    #[test]
    fn test_ahead_player_is_locked() {
        let mut game = controller(&["Chespin"]);
        game.submit_letter(PlayerId::One, "c").unwrap();

        assert_eq!(
            game.submit_letter(PlayerId::One, "h"),
            Err(MatchError::InputLocked(PlayerId::One))
        );
        game.submit_letter(PlayerId::Two, "z").unwrap();
        assert_eq!(game.gates(), Gates::OPEN);
    }

    #[test]
    fn test_rejected_submission_keeps_gates() {
        let mut game = controller(&["Chespin"]);
        game.submit_letter(PlayerId::One, "c").unwrap();
        game.submit_letter(PlayerId::Two, "c").unwrap();

        assert!(game.submit_letter(PlayerId::Two, "C").is_err());
        assert!(game.submit_letter(PlayerId::Two, "Enter").is_err());
        assert_eq!(game.gates(), Gates::OPEN);
    }

    #[test]
    fn test_continue_requires_terminal_session() {
        let mut game = controller(&["Chespin"]);
        assert_eq!(game.continue_round(), Err(MatchError::RoundInProgress));
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_full_reset_zeroes_scores() {
        let mut game = controller(&["a"]);
        game.submit_letter(PlayerId::Two, "a").unwrap();
        assert_eq!(game.score(PlayerId::Two), 1);

        game.continue_round().unwrap();
        assert_eq!(game.round(), 2);
        assert_eq!(game.score(PlayerId::Two), 1);

        game.full_reset();
        assert_eq!(game.round(), 1);
        assert_eq!(game.scores(), &PlayerPair::with_value(0));
        assert_eq!(game.gates(), Gates::OPEN);
    }

    #[test]
    fn test_player_names() {
        let config = MatchConfig::new().with_player_names("Ash", "").with_seed(1);
        let game = MatchController::new(config).unwrap();
        assert_eq!(game.player_name(PlayerId::One), "Ash");
        assert_eq!(game.player_name(PlayerId::Two), "Trainer 2");
    }

    #[test]
    fn test_seeded_matches_repeat() {
        let config = MatchConfig::new().with_seed(2024);
        let mut a = MatchController::new(config.clone()).unwrap();
        let mut b = MatchController::new(config).unwrap();

        for _ in 0..5 {
            for player in PlayerId::all() {
                assert_eq!(a.session(player).target_word(), b.session(player).target_word());
            }
            a.start_round();
            b.start_round();
        }
        assert_eq!(a.seed(), 2024);
    }
}
