use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Actions the player can perform in the game
///
/// This enum decouples SDL2 events from the game model. The render loop hands
/// each action to `game::apply_action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Text produced by a key press, normalized later by `GameState::apply_guess`
    Guess(String),
    /// Start a new round (the `5` key)
    Restart,
    /// Window closed or `Escape` pressed
    Quit,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens in phases:
/// 1. Poll SDL2 events
/// 2. Translate events to GameActions
/// 3. Return actions to the game loop for execution
///
/// Text input is forwarded in every phase. Whether a guess still counts is
/// decided per action by `game::apply_action`, so a restart followed by a letter
/// in the same frame plays that letter in the new round.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Process SDL2 events and return list of actions to handle
    ///
    /// Drains every pending event without blocking.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    ..
                } => {
                    self.handle_keydown(key, &mut actions);
                }
                Event::TextInput { text, .. } => {
                    self.handle_text_input(&text, &mut actions);
                }
                _ => {
                    // Mouse, window and key-up events are not used
                }
            }
        }

        actions
    }

    /// Handle keyboard key press events
    ///
    /// Restart and quit work in every context. Letters arrive separately as
    /// text input.
    fn handle_keydown(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Escape => actions.push(GameAction::Quit),
            Keycode::Num5 => actions.push(GameAction::Restart),
            _ => {}
        }
    }

    /// Handle characters produced by the keyboard
    fn handle_text_input(&self, text: &str, actions: &mut Vec<GameAction>) {
        actions.push(GameAction::Guess(text.to_string()));
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
