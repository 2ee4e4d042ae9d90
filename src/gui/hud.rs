//! Heads-up display
//!
//! Instructions, the masked word with its glow, the wrong-letter list and the
//! life support counter.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::{GameConfig, Palette};
use crate::game::GameState;
use crate::text::{draw_text, draw_text_centered, text_width};

pub const INSTRUCTIONS: [&str; 3] = [
    "Save the astronaut from the void of space!",
    "Type letters to guess the space-themed word",
    "Press 5 to restart, ESC to quit",
];

/// Glow radius around the word, in pixels
const GLOW_RADIUS: i32 = 2;

/// Life support color: green while plenty remains, yellow when half is gone,
/// red for the last two
pub fn life_support_color(remaining: u32, palette: &Palette) -> Color {
    match remaining {
        0..=2 => palette.red,
        3..=4 => palette.yellow,
        _ => palette.green,
    }
}

/// Offsets at which the white glow copy of the word is drawn
pub fn glow_offsets() -> impl Iterator<Item = (i32, i32)> {
    (-GLOW_RADIUS..=GLOW_RADIUS)
        .flat_map(|dx| (-GLOW_RADIUS..=GLOW_RADIUS).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
}

/// "WRONG: A B C", or `None` before the first miss
pub fn wrong_letters_label(state: &GameState) -> Option<String> {
    let wrong = state.wrong_letters();
    if wrong.is_empty() {
        return None;
    }
    let letters: Vec<String> = wrong.iter().map(char::to_string).collect();
    Some(format!("Wrong: {}", letters.join(" ")))
}

pub fn life_support_label(state: &GameState) -> String {
    format!("Life Support: {}", state.lives_remaining())
}

pub fn render(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    state: &GameState,
) -> Result<(), String> {
    render_instructions(canvas, config)?;
    render_word(canvas, config, state)?;
    render_status(canvas, config, state)
}

fn render_instructions(canvas: &mut Canvas<Window>, config: &GameConfig) -> Result<(), String> {
    let layout = &config.layout;
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        draw_text(
            canvas,
            line,
            layout.margin_x,
            layout.instructions_y + i as i32 * layout.instruction_spacing,
            config.palette.white,
            config.text.small,
        )?;
    }
    Ok(())
}

fn render_word(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    state: &GameState,
) -> Result<(), String> {
    let display = state.display_word();
    let (center_x, _) = config.center();
    let y = config.layout.word_y;
    let scale = config.text.large;

    for (dx, dy) in glow_offsets() {
        draw_text_centered(canvas, &display, center_x + dx, y + dy, config.palette.white, scale)?;
    }
    draw_text_centered(canvas, &display, center_x, y, config.palette.cyan, scale)
}

fn render_status(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    state: &GameState,
) -> Result<(), String> {
    let layout = &config.layout;
    let scale = config.text.medium;

    if let Some(label) = wrong_letters_label(state) {
        draw_text(canvas, &label, layout.margin_x, layout.status_y, config.palette.red, scale)?;
    }

    // Right-aligned against the same margin
    let label = life_support_label(state);
    let x = config.width as i32 - layout.margin_x - text_width(&label, scale) as i32;
    let color = life_support_color(state.lives_remaining(), &config.palette);
    draw_text(canvas, &label, x, layout.status_y, color, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordPicker;
    use crate::game::words::VOCABULARY;

    struct Pick(&'static str);

    impl WordPicker for Pick {
        fn pick(&mut self, _n: usize) -> usize {
            VOCABULARY.iter().position(|w| *w == self.0).unwrap()
        }
    }

    #[test]
    fn test_life_support_color_thresholds() {
        let palette = Palette::default();
        assert_eq!(life_support_color(6, &palette), palette.green);
        assert_eq!(life_support_color(5, &palette), palette.green);
        assert_eq!(life_support_color(4, &palette), palette.yellow);
        assert_eq!(life_support_color(3, &palette), palette.yellow);
        assert_eq!(life_support_color(2, &palette), palette.red);
        assert_eq!(life_support_color(0, &palette), palette.red);
    }

    #[test]
    fn test_glow_offsets_skip_origin() {
        let offsets: Vec<_> = glow_offsets().collect();
        assert_eq!(offsets.len(), 24);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-2, 2)));
    }

    #[test]
    fn test_status_labels() {
        let mut state = GameState::new(&mut Pick("EARTH"));
        assert_eq!(wrong_letters_label(&state), None);
        assert_eq!(life_support_label(&state), "Life Support: 6");

        for letter in ["Z", "E", "B"] {
            state.apply_guess(letter);
        }
        assert_eq!(wrong_letters_label(&state).as_deref(), Some("Wrong: B Z"));
        assert_eq!(life_support_label(&state), "Life Support: 4");
    }

    #[test]
    fn test_hud_text_fits_on_screen() {
        let config = GameConfig::default();
        for line in INSTRUCTIONS {
            let right = config.layout.margin_x + text_width(line, config.text.small) as i32;
            assert!(right < config.width as i32, "{line}");
        }
        let longest_word = VOCABULARY.iter().map(|w| w.len()).max().unwrap();
        let word_px = text_width(&"_ ".repeat(longest_word), config.text.large);
        assert!(word_px < config.width);
    }
}
