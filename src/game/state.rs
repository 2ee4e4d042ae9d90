// GameState struct
//
// Holds one round of the game: the secret word, the letters guessed so far and the
// wrong-guess count. Only `apply_guess` and `reset` mutate it; renderers borrow it
// immutably.

use std::collections::BTreeSet;

use log::{debug, info};

use super::words::{WordPicker, pick_word};
use super::{GuessOutcome, MAX_WRONG, Phase};

/// Placeholder drawn for letters that are still hidden
pub const BLANK_GLYPH: char = '_';

/// State of the current round
#[derive(Debug, Clone)]
pub struct GameState {
    secret_word: &'static str,
    guessed_letters: BTreeSet<char>,
    wrong_guesses: u32,
    phase: Phase,
}

/// Reduces raw text input to a guessable letter.
///
/// Returns `None` unless the input is exactly one alphabetic character whose
/// uppercase form is also a single character (`ß` upper-cases to "SS").
pub fn normalize_guess(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => Some(u),
                _ => None,
            }
        }
        _ => None,
    }
}

impl GameState {
    /// Starts the first round with a word drawn from `picker`
    pub fn new(picker: &mut impl WordPicker) -> Self {
        let mut state = GameState {
            secret_word: "",
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
            phase: Phase::Playing,
        };
        state.reset(picker);
        state
    }

    /// Starts a new round. The previous word may be drawn again.
    pub fn reset(&mut self, picker: &mut impl WordPicker) {
        self.secret_word = pick_word(picker);
        self.guessed_letters.clear();
        self.wrong_guesses = 0;
        self.phase = Phase::Playing;
        debug!("New round: {} letters ({})", self.secret_word.len(), self.secret_word);
    }

    /// Submits one guess.
    ///
    /// Invalid input, repeated letters and guesses after the round ended leave the
    /// state untouched. Win is checked before loss.
    pub fn apply_guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }
        let Some(letter) = normalize_guess(input) else {
            return GuessOutcome::Ignored;
        };
        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::Repeated(letter);
        }

        let hit = self.secret_word.contains(letter);
        if !hit {
            self.wrong_guesses += 1;
        }

        if self.is_word_complete() {
            self.phase = Phase::Over { won: true };
            info!("Round won: {}", self.secret_word);
            GuessOutcome::Won
        } else if self.wrong_guesses >= MAX_WRONG {
            self.phase = Phase::Over { won: false };
            info!("Round lost: {}", self.secret_word);
            GuessOutcome::Lost
        } else if hit {
            GuessOutcome::Hit(letter)
        } else {
            GuessOutcome::Miss(letter)
        }
    }

    fn is_word_complete(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    pub fn secret_word(&self) -> &str {
        self.secret_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Only meaningful once `is_over()` is true
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Over { won: true }
    }

    /// Wrong guesses still allowed before the round is lost
    pub fn lives_remaining(&self) -> u32 {
        MAX_WRONG.saturating_sub(self.wrong_guesses)
    }

    /// Guessed letters that are not in the word, in alphabetical order
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|c| !self.secret_word.contains(*c))
            .collect()
    }

    /// Number of word positions currently shown as letters
    pub fn revealed_count(&self) -> usize {
        self.secret_word
            .chars()
            .filter(|c| self.guessed_letters.contains(c))
            .count()
    }

    /// Word as shown on screen: one token per letter, each followed by a space
    ///
    /// ```text
    /// MARS with {M, S} guessed -> "M _ _ S "
    /// ```
    pub fn display_word(&self) -> String {
        let mut display = String::with_capacity(self.secret_word.len() * 2);
        for c in self.secret_word.chars() {
            if self.guessed_letters.contains(&c) {
                display.push(c);
            } else {
                display.push(BLANK_GLYPH);
            }
            display.push(' ');
        }
        display
    }
}
