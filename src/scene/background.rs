//! Space backdrop: vertical gradient plus twinkling stars

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::GameConfig;
use crate::shapes::fill_circle;
use crate::starfield::StarField;

/// Gradient color for row `y`, from dark blue at the top to near black at the bottom
pub fn gradient_color(y: u32, height: u32) -> Color {
    let fade = 1.0 - y as f32 / height as f32;
    Color::RGB(
        (25.0 * fade) as u8,
        (25.0 * fade) as u8,
        (50.0 + 100.0 * fade) as u8,
    )
}

/// Fills the canvas with the gradient and draws every star
pub fn render(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    stars: &StarField,
    ticks_ms: u64,
) -> Result<(), String> {
    for y in 0..config.height {
        canvas.set_draw_color(gradient_color(y, config.height));
        canvas.draw_line(
            Point::new(0, y as i32),
            Point::new(config.width as i32, y as i32),
        )?;
    }

    for star in stars.stars() {
        let level = star.intensity(ticks_ms);
        fill_circle(
            canvas,
            (star.x, star.y),
            star.size,
            Color::RGB(level, level, level),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(0, 700), Color::RGB(25, 25, 150));
        let bottom = gradient_color(699, 700);
        assert_eq!((bottom.r, bottom.g), (0, 0));
        assert!(bottom.b >= 50 && bottom.b < 52);
    }
}
