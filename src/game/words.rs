//! Vocabulary and word selection
//!
//! The secret word is always drawn from [`VOCABULARY`]. Selection goes through the
//! [`WordPicker`] trait so tests can choose the word deterministically.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Space-themed words a round can be played with (uppercase A-Z only)
pub const VOCABULARY: [&str; 24] = [
    "GALAXY", "PLANET", "ASTEROID", "COMET", "NEBULA",
    "SUPERNOVA", "BLACKHOLE", "UNIVERSE", "SATELLITE",
    "METEOR", "ORBIT", "COSMOS", "STELLAR", "QUASAR",
    "PULSAR", "JUPITER", "SATURN", "MERCURY", "VENUS",
    "NEPTUNE", "URANUS", "PLUTO", "MARS", "EARTH",
];

/// Source of randomness for word selection
///
/// Implementors return an index in `0..n`. `n` is never zero.
pub trait WordPicker {
    fn pick(&mut self, n: usize) -> usize;
}

/// Uniform picker backed by the thread-local generator
pub struct RandomPicker {
    rng: ThreadRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        RandomPicker { rng: rand::rng() }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPicker for RandomPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Draws one word from the vocabulary.
///
/// Out-of-range picks wrap around instead of panicking.
pub fn pick_word(picker: &mut impl WordPicker) -> &'static str {
    let index = picker.pick(VOCABULARY.len()) % VOCABULARY.len();
    VOCABULARY[index]
}
