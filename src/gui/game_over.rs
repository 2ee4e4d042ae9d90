//! End-of-Round Overlay Component
//!
//! Darkens the finished frame and reports the outcome. A lost round discloses the
//! secret word; a won round does not need to.

use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::text::{draw_text_centered, text_height};

/// Configuration for overlay appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub overlay_color: Color,
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,
    pub success_color: Color,
    pub failure_color: Color,
    pub detail_color: Color,
    pub hint_color: Color,
    /// Vertical distance between the three lines
    pub line_spacing: i32,
}

impl GameOverStyle {
    pub fn from_config(config: &GameConfig) -> Self {
        GameOverStyle {
            overlay_color: config.palette.black,
            overlay_alpha: config.overlay_alpha,
            success_color: config.palette.green,
            failure_color: config.palette.red,
            detail_color: config.palette.white,
            hint_color: config.palette.yellow,
            line_spacing: 50,
        }
    }
}

/// Lines shown for a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverText {
    pub title: String,
    pub detail: String,
    pub hint: String,
}

impl GameOverText {
    /// `None` while the round is still being played
    pub fn for_state(state: &GameState) -> Option<Self> {
        if !state.is_over() {
            return None;
        }
        let (title, detail) = if state.is_won() {
            ("MISSION SUCCESSFUL!".to_string(), "The astronaut is safe!".to_string())
        } else {
            (
                "MISSION FAILED!".to_string(),
                format!("The word was: {}", state.secret_word()),
            )
        };
        Some(GameOverText {
            title,
            detail,
            hint: "Press 5 to restart".to_string(),
        })
    }
}

/// Overlay drawn on top of everything once a round ends
pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new(config: &GameConfig) -> Self {
        GameOverScreen {
            style: GameOverStyle::from_config(config),
        }
    }

    /// Render the overlay; does nothing while the round is in progress
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        config: &GameConfig,
        state: &GameState,
    ) -> Result<(), String> {
        let Some(text) = GameOverText::for_state(state) else {
            return Ok(());
        };

        // Dark overlay
        canvas.set_blend_mode(BlendMode::Blend);
        let shade = self.style.overlay_color;
        canvas.set_draw_color(Color::RGBA(shade.r, shade.g, shade.b, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let (center_x, center_y) = config.center();
        let spacing = self.style.line_spacing;
        let title_color = if state.is_won() {
            self.style.success_color
        } else {
            self.style.failure_color
        };

        // Vertically centre each line on its row
        let large = config.text.large;
        let medium = config.text.medium;
        let half = |scale: u32| text_height(scale) as i32 / 2;

        draw_text_centered(canvas, &text.title, center_x, center_y - spacing - half(large), title_color, large)?;
        draw_text_centered(canvas, &text.detail, center_x, center_y - half(medium), self.style.detail_color, medium)?;
        draw_text_centered(canvas, &text.hint, center_x, center_y + spacing - half(medium), self.style.hint_color, medium)?;

        Ok(())
    }
}
