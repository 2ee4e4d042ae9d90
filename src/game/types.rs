// Shared enums used by the game model, the input system and the renderers

/// Number of wrong guesses that ends a round
pub const MAX_WRONG: u32 = 6;

/// Round phase for tracking whether guesses are still accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Over { won: bool },
}

/// Result of submitting one guess
///
/// Only used for logging; the state change has already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a single letter, or the round is already over
    Ignored,
    /// Letter was guessed earlier this round
    Repeated(char),
    Hit(char),
    Miss(char),
    Won,
    Lost,
}
