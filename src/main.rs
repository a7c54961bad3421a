//! poke-hangman terminal front end.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! 1 <key>     player one presses <key>
//! 2 <key>     player two presses <key>
//! continue    next round (after a win or loss)
//! reset       zero the scores and start over
//! show        print both boards
//! quit
//! ```
//!
//! An optional first argument names a JSON match config.
//! Logs go to stderr; set `RUST_LOG=poke_hangman=debug` to see picked words.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use poke_hangman::{
    Guess, GuessError, InvalidInputReason, MatchConfig, MatchController, MatchError, Outcome,
    PlayerId, SubmissionResult,
};

const USAGE: &str = "commands: 1 <letter> | 2 <letter> | continue | reset | show | quit";

enum Command<'a> {
    Key(PlayerId, &'a str),
    Continue,
    Reset,
    Show,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        match line {
            "continue" | "c" => return Some(Command::Continue),
            "reset" | "r" => return Some(Command::Reset),
            "show" | "s" => return Some(Command::Show),
            "quit" | "q" => return Some(Command::Quit),
            _ => {}
        }

        let (seat, key) = line.split_once(' ').unwrap_or((line, ""));
        let player = seat.parse::<u8>().ok().and_then(PlayerId::from_number)?;
        Some(Command::Key(player, key.trim()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => MatchConfig::default(),
    };
    let mut game = MatchController::new(config).context("invalid match config")?;

    info!(version = env!("CARGO_PKG_VERSION"), seed = game.seed(), "poke-hangman started");

    let mut out = io::stdout().lock();
    writeln!(out, "{USAGE}")?;
    render(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;

        let notice = match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Show) => None,
            Some(Command::Continue) => Some(match game.continue_round() {
                Ok(()) => "Here we go again!".to_string(),
                Err(_) => "Finish the round first!".to_string(),
            }),
            Some(Command::Reset) => {
                game.full_reset();
                Some("Your Pokéball supply has been restored! Good luck!".to_string())
            }
            Some(Command::Key(player, key)) => {
                let text = match game.submit_letter(player, key) {
                    Ok(result) => submission_notice(&result),
                    Err(err) => rejection_notice(&game, player, &err),
                };
                Some(format!("{}: {}", game.player_name(player), text))
            }
            None => Some(USAGE.to_string()),
        };

        if let Some(notice) = notice {
            writeln!(out, "\n{notice}")?;
        }
        render(&mut out, &game)?;
    }

    info!(round = game.round(), "poke-hangman finished");
    Ok(())
}

fn load_config(path: &str) -> Result<MatchConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path}"))?;
    MatchConfig::from_json(&raw).with_context(|| format!("invalid config file {path}"))
}

fn submission_notice(result: &SubmissionResult) -> String {
    match (result.outcome, result.guess) {
        (Outcome::Won, _) => "Victory! You gained +1 gym badges!".to_string(),
        (Outcome::Lost, _) => "Oh no, you lost! Want a rematch?".to_string(),
        (Outcome::InProgress, Guess::Hit) => {
            format!("GOTCHA, letter \"{}\" was caught!", result.letter)
        }
        (Outcome::InProgress, Guess::Miss) => {
            format!("Oh no, the letter \"{}\" ran away!", result.letter)
        }
    }
}

fn rejection_notice(game: &MatchController, player: PlayerId, err: &MatchError) -> String {
    match err {
        MatchError::Guess(GuessError::DuplicateGuess(_)) => {
            "You've already caught that letter!".to_string()
        }
        MatchError::Guess(GuessError::InvalidInput(InvalidInputReason::TooLong)) => {
            "You pressed a forbidden key".to_string()
        }
        MatchError::Guess(GuessError::InvalidInput(_)) => "Not a letter!".to_string(),
        MatchError::Guess(GuessError::SessionClosed) | MatchError::RoundInProgress => {
            "This round is over. Type `continue` or `reset`.".to_string()
        }
        MatchError::InputLocked(_) if game.can_continue() => {
            "This round is over. Type `continue` or `reset`.".to_string()
        }
        MatchError::InputLocked(_) => {
            format!("Wait for {} to take a turn!", game.player_name(player.other()))
        }
    }
}

fn render(out: &mut impl Write, game: &MatchController) -> io::Result<()> {
    let snapshot = game.snapshot();
    writeln!(out, "\n=== Round {} ===", snapshot.round)?;

    for (_, board) in snapshot.players.iter() {
        let session = &board.session;
        let hearts = match session.outcome {
            Outcome::Won => "VICTORY".to_string(),
            Outcome::Lost => "DEFEAT".to_string(),
            Outcome::InProgress => "❤".repeat(usize::from(session.lives_remaining)),
        };
        let stage = session
            .hangman_stage
            .map_or_else(|| "start".to_string(), |s| format!("{}/{}", s + 1, session.max_lives));
        let picks: Vec<String> = session.guessed_letters.iter().map(ToString::to_string).collect();

        writeln!(out, "{} (badges: {})  {}", board.name, board.score, hearts)?;
        writeln!(out, "  word:    {}", session.mask)?;
        if let Some(word) = &session.revealed_word {
            writeln!(out, "  answer:  {word}")?;
        }
        writeln!(out, "  picks:   {}", picks.join(" "))?;
        writeln!(out, "  hangman: {stage}")?;
        writeln!(out, "  input:   {}", if board.input_enabled { "open" } else { "locked" })?;
    }

    if snapshot.can_continue {
        writeln!(out, "Round over: type `continue` for the next round.")?;
    }
    out.flush()
}
