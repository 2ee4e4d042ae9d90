//! Frame composition
//!
//! Draws one complete frame from the current game state using the painter's
//! algorithm: layers are rendered back to front in a fixed order, and the
//! game-over overlay is only part of the frame once the round has ended.
//!
//! # Usage Example
//!
//! ```ignore
//! let mut frame_renderer = FrameRenderer::new(&config);
//! frame_renderer.render(&mut canvas, &config, &game_state, &stars, ticks_ms)?;
//! canvas.present();
//! ```

use rand::rngs::ThreadRng;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::gui::{GameOverScreen, hud};
use crate::scene::{astronaut, background, rig};
use crate::starfield::StarField;

/// One drawable layer of the frame, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Rig,
    Astronaut,
    Hud,
    GameOver,
}

/// Layers that make up the frame for `state`, in draw order
pub fn frame_layers(state: &GameState) -> Vec<Layer> {
    let mut layers = vec![Layer::Background, Layer::Rig, Layer::Astronaut, Layer::Hud];
    if state.is_over() {
        layers.push(Layer::GameOver);
    }
    layers
}

/// Holds the per-run rendering resources
pub struct FrameRenderer {
    game_over: GameOverScreen,
    /// Drives the distress sparks; word selection uses its own picker
    spark_rng: ThreadRng,
}

impl FrameRenderer {
    pub fn new(config: &GameConfig) -> Self {
        FrameRenderer {
            game_over: GameOverScreen::new(config),
            spark_rng: rand::rng(),
        }
    }

    /// Renders every layer of the frame. Does not present the canvas.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        config: &GameConfig,
        state: &GameState,
        stars: &StarField,
        ticks_ms: u64,
    ) -> Result<(), String> {
        for layer in frame_layers(state) {
            match layer {
                Layer::Background => background::render(canvas, config, stars, ticks_ms)?,
                Layer::Rig => rig::render(canvas, config, state)?,
                Layer::Astronaut => astronaut::render(canvas, config, state, &mut self.spark_rng)?,
                Layer::Hud => hud::render(canvas, config, state)?,
                Layer::GameOver => self.game_over.render(canvas, config, state)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordPicker;

    struct FirstWord;

    impl WordPicker for FirstWord {
        fn pick(&mut self, _n: usize) -> usize {
            // GALAXY
            0
        }
    }

    #[test]
    fn test_playing_frame_has_no_overlay() {
        let state = GameState::new(&mut FirstWord);
        assert_eq!(
            frame_layers(&state),
            vec![Layer::Background, Layer::Rig, Layer::Astronaut, Layer::Hud]
        );
    }

    #[test]
    fn test_overlay_drawn_last_when_over() {
        let mut state = GameState::new(&mut FirstWord);
        for letter in ["B", "C", "D", "E", "F", "H"] {
            state.apply_guess(letter);
        }
        assert!(state.is_over());
        let layers = frame_layers(&state);
        assert_eq!(layers.len(), 5);
        assert_eq!(layers.last(), Some(&Layer::GameOver));
        assert_eq!(layers[0], Layer::Background);
    }
}
