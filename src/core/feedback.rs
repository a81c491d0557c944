//! Per-letter feedback for a guess
//!
//! Each of the five positions is classified as:
//! - `Exact`: the letter is in the answer at this position
//! - `Present`: the letter is in the answer somewhere else
//! - `Absent`: the letter is not credited by the answer
//!
//! How repeated letters are credited depends on the [`DuplicateRule`].

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Exact,
    Present,
    Absent,
}

/// How letters that repeat in a guess are credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRule {
    /// Every occurrence of a letter found in the answer is `Present`,
    /// regardless of how many times the answer contains it.
    #[default]
    Lenient,
    /// Exact matches are consumed first, then `Present` is awarded only while
    /// unmatched copies of the letter remain in the answer.
    Capped,
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters in place
    pub const SOLVED: Self = Self([LetterFeedback::Exact; WORD_LENGTH]);

    /// Classify `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use cliordle::core::{DuplicateRule, Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::classify(&guess, &answer, DuplicateRule::Lenient);
    ///
    /// assert_eq!(feedback.as_slice(), &[Exact, Exact, Exact, Absent, Exact]);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, answer: &Word, rule: DuplicateRule) -> Self {
        match rule {
            DuplicateRule::Lenient => Self::classify_lenient(guess, answer),
            DuplicateRule::Capped => Self::classify_capped(guess, answer),
        }
    }

    fn classify_lenient(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = LetterFeedback::Exact;
            } else if answer.has_letter(letter) {
                *slot = LetterFeedback::Present;
            }
        }

        Self(result)
    }

    fn classify_capped(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact matches consume their letter
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = LetterFeedback::Exact;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters drawn from what is left
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == LetterFeedback::Exact {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// True when every position is `Exact`
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Feedback at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter()
            .map(|f| match f {
                LetterFeedback::Exact => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Exact, Present};
    use super::*;

    fn classify(guess: &str, answer: &str, rule: DuplicateRule) -> Feedback {
        Feedback::classify(
            &Word::new(guess).unwrap(),
            &Word::new(answer).unwrap(),
            rule,
        )
    }

    #[test]
    fn identical_words_are_all_exact() {
        for word in ["crane", "slate", "audio", "zzzzz", "speed"] {
            for rule in [DuplicateRule::Lenient, DuplicateRule::Capped] {
                let feedback = classify(word, word, rule);
                assert!(feedback.is_solved(), "{word} should solve itself");
                assert_eq!(feedback.iter().count(), 5);
            }
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        let feedback = classify("abcde", "fghij", DuplicateRule::Lenient);
        assert!(feedback.iter().all(|f| f == Absent));
    }

    #[test]
    fn mixed_feedback() {
        // TRAIN vs CRANE: T absent, R exact, A exact, I absent, N present
        let feedback = classify("train", "crane", DuplicateRule::Lenient);
        assert_eq!(feedback.as_slice(), &[Absent, Exact, Exact, Absent, Present]);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn lenient_over_credits_repeated_letters() {
        // SPEED vs CRANE has one E in the answer, both guessed E's are present
        let feedback = classify("speed", "crane", DuplicateRule::Lenient);
        assert_eq!(feedback.as_slice(), &[Absent, Absent, Present, Present, Absent]);
    }

    #[test]
    fn capped_limits_present_to_remaining_copies() {
        let feedback = classify("speed", "crane", DuplicateRule::Capped);
        assert_eq!(feedback.as_slice(), &[Absent, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn capped_exact_takes_priority_over_present() {
        // ROBOT vs FLOOR: first O present, second O exact
        let feedback = classify("robot", "floor", DuplicateRule::Capped);
        assert_eq!(feedback.as_slice(), &[Present, Present, Absent, Exact, Absent]);

        // GEESE vs THEME: both answer E's are matched exactly, so the
        // third guessed E gets nothing
        let feedback = classify("geese", "theme", DuplicateRule::Capped);
        assert_eq!(feedback.as_slice(), &[Absent, Absent, Exact, Absent, Exact]);

        let feedback = classify("geese", "theme", DuplicateRule::Lenient);
        assert_eq!(feedback.as_slice(), &[Absent, Present, Exact, Absent, Exact]);
    }

    #[test]
    fn emoji_rendering() {
        let feedback = classify("train", "crane", DuplicateRule::Lenient);
        assert_eq!(feedback.to_emoji(), "⬜🟩🟩⬜🟨");
        assert_eq!(Feedback::SOLVED.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
