// Action dispatch
//
// Applies the actions produced by the input system to the game state. This is the
// only place the render loop mutates GameState.

use log::{debug, info};

use crate::input_system::GameAction;

use super::words::WordPicker;
use super::GameState;

/// Whether the render loop keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Applies one action to the game state
///
/// Guesses are only forwarded while the round is playing, judged against the
/// phase at the moment the action is applied. Restart is accepted in any phase.
pub fn apply_action(
    state: &mut GameState,
    picker: &mut impl WordPicker,
    action: &GameAction,
) -> LoopControl {
    match action {
        GameAction::Quit => {
            info!("Quit requested");
            return LoopControl::Quit;
        }
        GameAction::Restart => {
            state.reset(picker);
            info!("Round restarted");
        }
        GameAction::Guess(text) => {
            if !state.is_over() {
                let outcome = state.apply_guess(text);
                debug!(
                    "Guess {:?} -> {:?} ({} of {} revealed, guessed {:?})",
                    text,
                    outcome,
                    state.revealed_count(),
                    state.secret_word().len(),
                    state.guessed_letters(),
                );
            }
        }
    }
    LoopControl::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::words::VOCABULARY;
    use crate::game::Phase;

    struct StubPicker(usize);

    impl WordPicker for StubPicker {
        fn pick(&mut self, _n: usize) -> usize {
            self.0
        }
    }

    fn mars_picker() -> StubPicker {
        StubPicker(VOCABULARY.iter().position(|w| *w == "MARS").unwrap())
    }

    fn guess(letter: &str) -> GameAction {
        GameAction::Guess(letter.to_string())
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        assert_eq!(apply_action(&mut state, &mut picker, &GameAction::Quit), LoopControl::Quit);
    }

    #[test]
    fn test_guess_forwarded_while_playing() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        assert_eq!(apply_action(&mut state, &mut picker, &guess("m")), LoopControl::Continue);
        assert!(state.guessed_letters().contains(&'M'));
    }

    #[test]
    fn test_playing_to_won_then_restart() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        for letter in ["M", "A", "R", "S"] {
            apply_action(&mut state, &mut picker, &guess(letter));
        }
        assert_eq!(state.phase(), Phase::Over { won: true });

        // Guesses are dropped while over
        apply_action(&mut state, &mut picker, &guess("Q"));
        assert!(!state.guessed_letters().contains(&'Q'));

        apply_action(&mut state, &mut picker, &GameAction::Restart);
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.guessed_letters().is_empty());
    }

    #[test]
    fn test_playing_to_lost() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        for letter in ["B", "C", "D", "E", "F", "G"] {
            apply_action(&mut state, &mut picker, &guess(letter));
        }
        assert_eq!(state.phase(), Phase::Over { won: false });
    }

    #[test]
    fn test_restart_while_playing() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        apply_action(&mut state, &mut picker, &guess("Q"));
        assert_eq!(state.wrong_guesses(), 1);

        apply_action(&mut state, &mut picker, &GameAction::Restart);
        assert_eq!(state.wrong_guesses(), 0);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_restart_then_guess_in_one_batch() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        for letter in ["M", "A", "R", "S"] {
            apply_action(&mut state, &mut picker, &guess(letter));
        }
        assert!(state.is_over());

        // Restart and a letter polled in the same frame
        for action in [GameAction::Restart, guess("5"), guess("q")] {
            apply_action(&mut state, &mut picker, &action);
        }
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.guessed_letters().contains(&'Q'));
        assert_eq!(state.wrong_guesses(), 1);
    }

    #[test]
    fn test_repeated_and_invalid_guesses_leave_state() {
        let mut picker = mars_picker();
        let mut state = GameState::new(&mut picker);
        apply_action(&mut state, &mut picker, &guess("m"));
        let guessed = state.guessed_letters().clone();

        for text in ["M", "m", "7", "xy"] {
            assert_eq!(apply_action(&mut state, &mut picker, &guess(text)), LoopControl::Continue);
        }
        assert_eq!(state.guessed_letters(), &guessed);
        assert_eq!(state.wrong_guesses(), 0);
        assert_eq!(state.phase(), Phase::Playing);
    }
}
