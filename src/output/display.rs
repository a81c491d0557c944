//! Display functions for command results

use super::formatters::{create_progress_bar, format_board, guess_noun};
use super::theme::Theme;
use crate::core::{Feedback, Word};
use crate::game::{Board, GameOutcome};
use crate::stats::Player;
use colored::Colorize;
use std::io::{self, Write};

/// Print the board followed by a blank line
///
/// # Errors
/// Returns any error from the writer.
pub fn print_board(out: &mut impl Write, board: &Board, theme: &Theme) -> io::Result<()> {
    write!(out, "{}", format_board(board, theme))?;
    writeln!(out)
}

/// Print the end-of-game message and the guess history
///
/// # Errors
/// Returns any error from the writer.
pub fn print_result(
    out: &mut impl Write,
    outcome: &GameOutcome,
    history: &[(Word, Feedback)],
) -> io::Result<()> {
    if outcome.solved {
        writeln!(
            out,
            "{}",
            format!(
                "Impressive! You got the word in {} {}",
                outcome.attempts,
                guess_noun(outcome.attempts)
            )
            .green()
            .bold()
        )?;
    } else {
        writeln!(
            out,
            "The answer was {}",
            outcome.answer.text().to_uppercase().bright_yellow().bold()
        )?;
    }

    for (i, (word, feedback)) in history.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase(),
            feedback.to_emoji()
        )?;
    }
    Ok(())
}

/// Print lifetime statistics and the guess distribution
///
/// # Errors
/// Returns any error from the writer.
pub fn print_stats(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(out, "{}", "---     STATISTICS     ---".bright_cyan().bold())?;
    writeln!(
        out,
        "Played: {} | Win%: {:.0}% | Current streak: {} | Longest streak: {}",
        player.games_played,
        player.win_percentage(),
        player.current_streak,
        player.longest_streak
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "--- GUESS DISTRIBUTION ---".bright_cyan().bold())?;
    let most = player.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in player.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(most), 20);
        writeln!(out, "{}\t|\t{count:>4} {}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the two preference flags
///
/// # Errors
/// Returns any error from the writer.
pub fn print_settings(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(out, "{}", "---   CURRENT SETTINGS   ---".bright_cyan().bold())?;
    writeln!(out, "High-contrast\t|\t{}", player.high_contrast)?;
    writeln!(out, "Hard mode\t|\t{}", player.hard_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DuplicateRule;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stats_output() {
        let player = Player {
            games_played: 4,
            games_won: 3,
            current_streak: 2,
            longest_streak: 2,
            guess_distribution: [0, 0, 2, 1, 0, 0],
            ..Player::default()
        };
        let text = render(|out| print_stats(out, &player));

        assert!(text.contains("Played: 4 | Win%: 75% | Current streak: 2 | Longest streak: 2"));
        assert!(text.contains("3\t|\t   2 ████████████████████"));
        assert!(text.contains("4\t|\t   1 ██████████░░░░░░░░░░"));
        assert!(text.contains("1\t|\t   0 ░░░░░░░░░░░░░░░░░░░░"));
    }

    #[test]
    fn stats_output_for_new_player() {
        let text = render(|out| print_stats(out, &Player::default()));
        assert!(text.contains("Played: 0 | Win%: 0%"));
    }

    #[test]
    fn settings_output() {
        let player = Player {
            high_contrast: true,
            ..Player::default()
        };
        let text = render(|out| print_settings(out, &player));
        assert_eq!(
            text,
            "---   CURRENT SETTINGS   ---\nHigh-contrast\t|\ttrue\nHard mode\t|\tfalse\n"
        );
    }

    #[test]
    fn result_output() {
        let answer = Word::new("crane").unwrap();
        let history: Vec<(Word, Feedback)> = ["train", "crane"]
            .into_iter()
            .map(|g| {
                let word = Word::new(g).unwrap();
                let feedback = Feedback::classify(&word, &answer, DuplicateRule::Lenient);
                (word, feedback)
            })
            .collect();

        let won = GameOutcome {
            solved: true,
            attempts: 2,
            answer: answer.clone(),
        };
        let text = render(|out| print_result(out, &won, &history));
        assert!(text.starts_with("Impressive! You got the word in 2 guesses\n"));
        assert!(text.contains("1. TRAIN ⬜🟩🟩⬜🟨"));
        assert!(text.contains("2. CRANE 🟩🟩🟩🟩🟩"));

        let lost = GameOutcome {
            solved: false,
            attempts: 6,
            answer,
        };
        let text = render(|out| print_result(out, &lost, &[]));
        assert_eq!(text, "The answer was CRANE\n");
    }
}
