//! Interactive game command
//!
//! Prompts for guesses until the session is over, then records the outcome
//! and saves the player. Nothing is saved if input ends mid-game.

use crate::core::Word;
use crate::error::{GameError, Result};
use crate::game::{GameOutcome, MAX_GUESSES, Session, SessionState};
use crate::output::{Theme, print_board, print_result};
use crate::stats::Player;
use crate::storage::{KeyValueStore, PlayerRepository};
use crate::wordlists::WordSource;
use log::info;
use std::io::{BufRead, Write};

/// Play one game with a random answer and persist the result
///
/// # Errors
///
/// Returns an error if:
/// - The word source cannot supply an answer
/// - Input ends or fails before the game is over
/// - The updated player cannot be saved
pub fn run_play<S, K>(
    player: &mut Player,
    repo: &PlayerRepository<K>,
    source: &S,
    input: impl BufRead,
    out: impl Write,
) -> Result<GameOutcome>
where
    S: WordSource + ?Sized,
    K: KeyValueStore,
{
    let answer = source.random_answer()?;
    let outcome = play_game(player, source, answer, input, out)?;

    player.apply_outcome(&outcome)?;
    repo.save(player)?;
    info!(
        "recorded {} game in {} attempts",
        if outcome.solved { "won" } else { "lost" },
        outcome.attempts
    );
    Ok(outcome)
}

/// Drive a session against a known answer without touching storage
///
/// # Errors
///
/// Returns `GameError::InputClosed` if input ends before the game is over,
/// or an I/O error from the reader or writer.
pub fn play_game<S: WordSource + ?Sized>(
    player: &Player,
    source: &S,
    answer: Word,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<GameOutcome> {
    let theme = Theme::for_contrast(player.high_contrast);
    let mut session = Session::new(player, source, answer);

    writeln!(out, "--- START OF CLIORDLE GAME ---")?;
    while let SessionState::AwaitingGuess { attempt } = session.state() {
        write!(out, "Guess {attempt}/{MAX_GUESSES}: ")?;
        out.flush()?;

        // Undecodable bytes become an invalid guess, not an I/O error
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            return Err(GameError::InputClosed.into());
        }

        match session.submit_guess(&String::from_utf8_lossy(&line)) {
            Ok(_) => print_board(&mut out, &session.board(), &theme)?,
            Err(rejected) => writeln!(out, "{rejected}")?,
        }
    }

    let outcome = session.finish()?;
    print_result(&mut out, &outcome, session.guesses())?;
    Ok(outcome)
}
