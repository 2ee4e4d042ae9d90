//! Energy platform the astronaut hangs from
//!
//! Platform base, a dashed vertical energy beam, a horizontal beam ending in a
//! field generator, and a red tether that appears after the first wrong guess.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::shapes::{draw_thick_line, fill_circle};

const BEAM_HEIGHT: i32 = 200;
const BEAM_SEGMENT_STEP: i32 = 10;
const BEAM_SEGMENT_LENGTH: i32 = 8;
const ARM_LENGTH: i32 = 150;

/// Color of the vertical beam segment starting `offset` pixels above the base
///
/// Green fades out with height; once it would go negative the segment snaps back
/// to the palette cyan.
pub fn beam_segment_color(offset: i32, cyan: Color) -> Color {
    let green = 255 - offset * 2;
    if green > 0 {
        Color::RGB(0, green as u8, 255)
    } else {
        cyan
    }
}

pub fn render(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    state: &GameState,
) -> Result<(), String> {
    let palette = &config.palette;
    let (base_x, base_y) = config.layout.rig_base;

    // Platform base with a glowing top edge
    canvas.set_draw_color(palette.gray);
    canvas.fill_rect(Rect::new(base_x - 50, base_y, 100, 20))?;
    canvas.set_draw_color(palette.cyan);
    canvas.fill_rect(Rect::new(base_x - 50, base_y, 100, 5))?;

    // Vertical energy beam
    for offset in (0..BEAM_HEIGHT).step_by(BEAM_SEGMENT_STEP as usize) {
        draw_thick_line(
            canvas,
            (base_x, base_y - offset),
            (base_x, base_y - offset - BEAM_SEGMENT_LENGTH),
            3,
            beam_segment_color(offset, palette.cyan),
        )?;
    }

    // Horizontal beam and field generator
    let top = base_y - BEAM_HEIGHT;
    let arm_end = base_x + ARM_LENGTH;
    draw_thick_line(canvas, (base_x, top), (arm_end, top), 4, palette.cyan)?;
    fill_circle(canvas, (arm_end, top), 8, palette.purple)?;

    if state.wrong_guesses() > 0 {
        draw_thick_line(canvas, (arm_end, top + 8), (arm_end, top + 50), 2, palette.red)?;
    }

    Ok(())
}
