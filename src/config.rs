//! Game configuration
//!
//! Screen size, frame rate, colors, text sizes and layout anchors. Built once in
//! `main` and borrowed by every renderer; nothing here changes at runtime.

use sdl2::pixels::Color;

/// Named colors used across the scene
#[derive(Debug, Clone)]
pub struct Palette {
    pub black: Color,
    pub white: Color,
    pub blue: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub purple: Color,
    pub cyan: Color,
    pub gray: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            black: Color::RGB(0, 0, 0),
            white: Color::RGB(255, 255, 255),
            blue: Color::RGB(100, 149, 237),
            red: Color::RGB(255, 69, 0),
            yellow: Color::RGB(255, 215, 0),
            green: Color::RGB(50, 205, 50),
            purple: Color::RGB(138, 43, 226),
            cyan: Color::RGB(0, 255, 255),
            gray: Color::RGB(128, 128, 128),
        }
    }
}

/// Bitmap font scale for each text tier
///
/// A glyph is 6 * scale pixels wide (including spacing) and 7 * scale tall.
#[derive(Debug, Clone, Copy)]
pub struct TextScale {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
}

impl Default for TextScale {
    fn default() -> Self {
        TextScale {
            large: 4,
            medium: 3,
            small: 2,
        }
    }
}

/// Fixed anchor points for the scene, in canvas pixels
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Top-centre of the rig platform
    pub rig_base: (i32, i32),
    /// Centre of the astronaut helmet
    pub astronaut: (i32, i32),
    /// Top edge of the word display
    pub word_y: i32,
    /// Top edge of the status row (wrong letters, life support)
    pub status_y: i32,
    /// Left margin for instructions and the wrong-letter list
    pub margin_x: i32,
    /// Top edge of the first instruction line
    pub instructions_y: i32,
    /// Vertical spacing between instruction lines
    pub instruction_spacing: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            rig_base: (150, 500),
            astronaut: (225, 350),
            word_y: 150,
            status_y: 600,
            margin_x: 50,
            instructions_y: 50,
            instruction_spacing: 25,
        }
    }
}

/// Immutable configuration for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub star_count: usize,
    /// Alpha of the black overlay drawn when a round ends
    pub overlay_alpha: u8,
    pub palette: Palette,
    pub text: TextScale,
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Space Hangman".to_string(),
            width: 1000,
            height: 700,
            fps: 60,
            star_count: 100,
            overlay_alpha: 128,
            palette: Palette::default(),
            text: TextScale::default(),
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    pub fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }
}
