//! Player profile and the statistics update rules

use crate::error::StatsError;
use crate::game::{GameOutcome, MAX_GUESSES};

/// Durable player profile: lifetime statistics plus display/rule preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Index `i` counts games won in exactly `i + 1` guesses
    pub guess_distribution: [u32; MAX_GUESSES],
    pub high_contrast: bool,
    pub hard_mode: bool,
}

impl Player {
    /// Record a finished game
    ///
    /// A solved game extends the streak and bumps the distribution bucket for
    /// its guess count; a failed game resets the current streak. Either way
    /// `games_played` goes up by one.
    ///
    /// # Errors
    /// Returns `StatsError::AttemptsOutOfRange` for a solved outcome whose
    /// attempt count is not in `1..=6`. The player is left untouched.
    ///
    /// # Examples
    /// ```
    /// use cliordle::core::Word;
    /// use cliordle::game::GameOutcome;
    /// use cliordle::stats::Player;
    ///
    /// let mut player = Player::default();
    /// let outcome = GameOutcome {
    ///     solved: true,
    ///     attempts: 3,
    ///     answer: Word::new("crane").unwrap(),
    /// };
    /// player.apply_outcome(&outcome).unwrap();
    ///
    /// assert_eq!(player.games_won, 1);
    /// assert_eq!(player.guess_distribution[2], 1);
    /// ```
    pub fn apply_outcome(&mut self, outcome: &GameOutcome) -> Result<(), StatsError> {
        if outcome.solved {
            let bucket = outcome
                .attempts
                .checked_sub(1)
                .filter(|&i| i < MAX_GUESSES)
                .ok_or(StatsError::AttemptsOutOfRange(outcome.attempts))?;

            self.current_streak = self.current_streak.saturating_add(1);
            self.longest_streak = self.longest_streak.max(self.current_streak);
            self.guess_distribution[bucket] = self.guess_distribution[bucket].saturating_add(1);
            self.games_won = self.games_won.saturating_add(1);
        } else {
            self.current_streak = 0;
        }
        self.games_played = self.games_played.saturating_add(1);
        Ok(())
    }

    /// Value-returning form of [`apply_outcome`](Self::apply_outcome)
    ///
    /// # Errors
    /// Same as `apply_outcome`.
    pub fn with_outcome(mut self, outcome: &GameOutcome) -> Result<Self, StatsError> {
        self.apply_outcome(outcome)?;
        Ok(self)
    }

    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Describe the first broken profile invariant, if any
    ///
    /// Stored data written by older versions is not trusted blindly.
    #[must_use]
    pub fn invariant_violation(&self) -> Option<String> {
        let distributed: u64 = self.guess_distribution.iter().map(|&n| u64::from(n)).sum();

        if self.games_won > self.games_played {
            Some(format!(
                "won {} exceeds played {}",
                self.games_won, self.games_played
            ))
        } else if self.current_streak > self.longest_streak {
            Some(format!(
                "current streak {} exceeds longest streak {}",
                self.current_streak, self.longest_streak
            ))
        } else if distributed > u64::from(self.games_won) {
            Some(format!(
                "distribution total {distributed} exceeds won {}",
                self.games_won
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn win(attempts: usize) -> GameOutcome {
        GameOutcome {
            solved: true,
            attempts,
            answer: Word::new("crane").unwrap(),
        }
    }

    fn loss() -> GameOutcome {
        GameOutcome {
            solved: false,
            attempts: MAX_GUESSES,
            answer: Word::new("crane").unwrap(),
        }
    }

    fn seasoned() -> Player {
        Player {
            games_played: 20,
            games_won: 15,
            current_streak: 4,
            longest_streak: 7,
            guess_distribution: [0, 2, 5, 4, 3, 1],
            high_contrast: true,
            hard_mode: false,
        }
    }

    #[test]
    fn win_updates_every_counter() {
        for attempts in 1..=MAX_GUESSES {
            let before = seasoned();
            let after = before.clone().with_outcome(&win(attempts)).unwrap();

            assert_eq!(after.games_played, before.games_played + 1);
            assert_eq!(after.games_won, before.games_won + 1);
            assert_eq!(after.current_streak, before.current_streak + 1);
            assert_eq!(
                after.longest_streak,
                before.longest_streak.max(before.current_streak + 1)
            );
            for i in 0..MAX_GUESSES {
                let expected = before.guess_distribution[i] + u32::from(i == attempts - 1);
                assert_eq!(after.guess_distribution[i], expected);
            }
            assert_eq!(after.high_contrast, before.high_contrast);
        }
    }

    #[test]
    fn win_extends_longest_streak_when_current_catches_up() {
        let mut player = Player {
            current_streak: 7,
            ..seasoned()
        };
        player.apply_outcome(&win(2)).unwrap();

        assert_eq!(player.current_streak, 8);
        assert_eq!(player.longest_streak, 8);
    }

    #[test]
    fn loss_resets_streak_only() {
        let before = seasoned();
        let after = before.clone().with_outcome(&loss()).unwrap();

        assert_eq!(after.current_streak, 0);
        assert_eq!(after.games_played, before.games_played + 1);
        assert_eq!(after.games_won, before.games_won);
        assert_eq!(after.longest_streak, before.longest_streak);
        assert_eq!(after.guess_distribution, before.guess_distribution);
    }

    #[test]
    fn first_game_lost() {
        let player = Player::default().with_outcome(&loss()).unwrap();

        assert_eq!(player.games_played, 1);
        assert_eq!(player.games_won, 0);
        assert_eq!(player.current_streak, 0);
        assert_eq!(player.longest_streak, 0);
        assert_eq!(player.games_lost(), 1);
    }

    #[test]
    fn solved_outcome_with_bad_attempts_is_rejected() {
        for attempts in [0, 7, 100] {
            let mut player = seasoned();
            let err = player.apply_outcome(&win(attempts)).unwrap_err();

            assert_eq!(err, StatsError::AttemptsOutOfRange(attempts));
            assert_eq!(player, seasoned(), "player must be unchanged");
        }
    }

    #[test]
    fn win_percentage() {
        assert!(Player::default().win_percentage().abs() < f64::EPSILON);
        assert!((seasoned().win_percentage() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn invariant_violations_are_reported() {
        assert_eq!(seasoned().invariant_violation(), None);
        assert_eq!(Player::default().invariant_violation(), None);

        let bad = Player {
            games_won: 30,
            ..seasoned()
        };
        assert!(bad.invariant_violation().unwrap().contains("won 30"));

        let bad = Player {
            current_streak: 9,
            ..seasoned()
        };
        assert!(bad.invariant_violation().unwrap().contains("streak"));

        let bad = Player {
            guess_distribution: [10, 10, 0, 0, 0, 0],
            ..seasoned()
        };
        assert!(bad.invariant_violation().unwrap().contains("distribution"));
    }
}
