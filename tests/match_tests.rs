//! Match controller tests.
//!
//! These tests play full rounds through `MatchController` and check scores,
//! round transitions, and what the presentation layer gets to see.

use poke_hangman::{
    GuessError, InvalidInputReason, MatchConfig, MatchController, MatchError, Outcome, PlayerId,
    WordBank,
};

fn game(word: &str) -> MatchController {
    MatchController::new(MatchConfig::new().with_words([word]).with_seed(7)).unwrap()
}

/// SQUIRTLE through the controller: player one wins and scores.
#[test]
fn test_squirtle_round() {
    let mut g = game("Squirtle");
    let p1 = ["S", "Q", "U", "I", "R", "T", "L", "E"];
    let p2 = ["A", "B", "C", "D", "F", "G", "H"];

    for (i, key) in p1.iter().enumerate() {
        let result = g.submit_letter(PlayerId::One, key).unwrap();
        if let Some(miss) = p2.get(i) {
            g.submit_letter(PlayerId::Two, miss).unwrap();
        } else {
            assert_eq!(result.outcome, Outcome::Won);
            assert_eq!(result.mask, "SQUIRTLE");
        }
    }

    assert_eq!(g.score(PlayerId::One), 1);
    assert_eq!(g.score(PlayerId::Two), 0);
    assert_eq!(g.session(PlayerId::Two).lives_remaining(), 3);
    assert!(g.can_continue());
}

/// ABC through the controller: player one loses, player two finishes and scores.
#[test]
fn test_abc_round_loss_then_opponent_wins() {
    let mut g = game("ABC");
    let p1 = ["Z", "X", "Q", "W", "J", "K", "F", "H", "Y", "V"];
    let p2 = ["a", "b", "d", "e", "g", "i", "l", "m", "n"];

    for (i, key) in p1.iter().enumerate() {
        g.submit_letter(PlayerId::One, key).unwrap();
        if let Some(other) = p2.get(i) {
            g.submit_letter(PlayerId::Two, other).unwrap();
        }
    }

    let loser = g.session(PlayerId::One);
    assert_eq!(loser.outcome(), Outcome::Lost);
    assert_eq!(loser.lives_remaining(), 0);
    assert_eq!(loser.mask_string(), "___");
    assert!(g.can_continue());
    assert_eq!(g.score(PlayerId::One), 0);

    assert_eq!(
        g.submit_letter(PlayerId::One, "a"),
        Err(MatchError::Guess(GuessError::SessionClosed))
    );

    let result = g.submit_letter(PlayerId::Two, "c").unwrap();
    assert_eq!(result.outcome, Outcome::Won);
    assert_eq!(g.score(PlayerId::Two), 1);
}

/// A loss alone scores nothing for either side.
#[test]
fn test_loss_scores_nothing() {
    let config = MatchConfig::new()
        .with_words(["Rowlet"])
        .with_starting_lives(1)
        .with_seed(3);
    let mut g = MatchController::new(config).unwrap();

    g.submit_letter(PlayerId::Two, "q").unwrap();

    assert_eq!(g.session(PlayerId::Two).outcome(), Outcome::Lost);
    assert_eq!(g.score(PlayerId::One), 0);
    assert_eq!(g.score(PlayerId::Two), 0);
}

/// Scores accumulate across rounds until a full reset.
#[test]
fn test_scores_persist_across_rounds() {
    let mut g = game("Mew");

    for round in 1..=3u32 {
        assert_eq!(g.round(), round);
        g.submit_letter(PlayerId::One, "m").unwrap();
        g.submit_letter(PlayerId::Two, "m").unwrap();
        g.submit_letter(PlayerId::One, "e").unwrap();
        g.submit_letter(PlayerId::Two, "e").unwrap();
        g.submit_letter(PlayerId::One, "w").unwrap();
        g.continue_round().unwrap();
    }

    assert_eq!(g.score(PlayerId::One), 3);
    assert_eq!(g.score(PlayerId::Two), 0);

    g.full_reset();
    assert_eq!(g.score(PlayerId::One), 0);
    assert_eq!(g.round(), 1);
}

/// Starting a round wipes both boards but not the scores.
#[test]
fn test_start_round_resets_sessions() {
    let mut g = game("Totodile");
    g.submit_letter(PlayerId::One, "t").unwrap();
    g.submit_letter(PlayerId::Two, "z").unwrap();

    g.start_round();

    for player in PlayerId::all() {
        let s = g.session(player);
        assert_eq!(s.guess_count(), 0);
        assert_eq!(s.lives_remaining(), 10);
        assert_eq!(s.mask_string(), "________");
        assert_eq!(s.outcome(), Outcome::InProgress);
    }
    assert!(!g.can_continue());
}

/// Rounds do not advance on their own.
#[test]
fn test_round_waits_for_continue() {
    let mut g = game("ab");
    g.submit_letter(PlayerId::One, "a").unwrap();
    g.submit_letter(PlayerId::Two, "a").unwrap();
    g.submit_letter(PlayerId::One, "b").unwrap();

    assert_eq!(g.round(), 1);
    assert_eq!(g.session(PlayerId::One).outcome(), Outcome::Won);
    assert!(g.can_continue());

    g.continue_round().unwrap();
    assert_eq!(g.round(), 2);
    assert_eq!(g.continue_round(), Err(MatchError::RoundInProgress));
}

/// Bad keys are reported as bad keys even once the round is over.
#[test]
fn test_invalid_input_checked_before_round_state() {
    let mut g = game("a");
    let result = g.submit_letter(PlayerId::One, "a").unwrap();
    assert_eq!(result.outcome, Outcome::Won);

    let invalid = Err(MatchError::Guess(GuessError::InvalidInput(InvalidInputReason::TooLong)));
    assert_eq!(g.submit_letter(PlayerId::One, "Enter"), invalid);
    assert_eq!(g.submit_letter(PlayerId::Two, "Enter"), invalid);
    assert_eq!(
        g.submit_letter(PlayerId::Two, "1"),
        Err(MatchError::Guess(GuessError::InvalidInput(InvalidInputReason::NotALetter)))
    );

    assert_eq!(
        g.submit_letter(PlayerId::One, "b"),
        Err(MatchError::Guess(GuessError::SessionClosed))
    );
    assert_eq!(g.submit_letter(PlayerId::Two, "b"), Err(MatchError::InputLocked(PlayerId::Two)));
}

/// Words come from the configured bank only.
#[test]
fn test_words_come_from_bank() {
    let words = ["Snivy", "Tepig", "Oshawott"];
    let mut g = MatchController::new(MatchConfig::new().with_words(words).with_seed(99)).unwrap();
    let bank = WordBank::new(words).unwrap();

    for _ in 0..20 {
        for player in PlayerId::all() {
            let word = g.session(player).target_word().to_string();
            assert!(bank.contains(&word), "{word} not in bank");
        }
        g.start_round();
    }
}

/// Default config draws from the starter list.
#[test]
fn test_default_config_uses_starters() {
    let g = MatchController::new(MatchConfig::new().with_seed(5)).unwrap();
    let starters = WordBank::starters();

    for player in PlayerId::all() {
        assert!(starters.contains(&g.session(player).target_word().to_string()));
    }
    assert_eq!(g.player_name(PlayerId::One), "Trainer 1");
}

/// Snapshot exposes masks, lives, gates, and continue availability.
#[test]
fn test_snapshot_after_win() {
    let mut g = game("ab");
    g.submit_letter(PlayerId::One, "a").unwrap();
    g.submit_letter(PlayerId::Two, "x").unwrap();
    g.submit_letter(PlayerId::One, "b").unwrap();

    let snap = g.snapshot();
    assert!(snap.can_continue);
    assert!(!snap.gates.p1_enabled && !snap.gates.p2_enabled);

    let p1 = &snap.players[PlayerId::One];
    assert_eq!(p1.score, 1);
    assert_eq!(p1.session.outcome, Outcome::Won);
    assert_eq!(p1.session.revealed_word.as_deref(), Some("AB"));

    let p2 = &snap.players[PlayerId::Two];
    assert_eq!(p2.session.mask, "__");
    assert_eq!(p2.session.lives_remaining, 9);
    assert_eq!(p2.session.hangman_stage, Some(0));
    assert_eq!(p2.session.revealed_word, None);
}
