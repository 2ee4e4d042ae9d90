// Game module - the word-guessing model, independent of SDL2
//
// This module contains:
// - state.rs: GameState (secret word, guesses, round phase)
// - types.rs: Phase, GuessOutcome and MAX_WRONG
// - words.rs: vocabulary and the WordPicker randomness seam
// - reveal.rs: wrong-guess count to astronaut stage mapping
// - systems.rs: applies input actions to the state

pub mod reveal;
pub mod state;
pub mod systems;
pub mod types;
pub mod words;

// Re-export types for convenience
pub use state::GameState;
pub use systems::{LoopControl, apply_action};
pub use types::*;
pub use words::{RandomPicker, WordPicker};
