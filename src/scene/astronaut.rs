//! The astronaut in peril
//!
//! Each wrong guess unlocks one more body part (see `game::reveal`). At the final
//! stage a handful of red distress sparks flicker around the helmet, re-rolled
//! every frame.

use std::f32::consts::PI;

use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::game::reveal::{RevealStage, revealed_stages};
use crate::shapes::{draw_arc, draw_circle, draw_thick_line, fill_circle, fill_rounded_rect};

const LIMB_WIDTH: i32 = 5;
const SPARK_COUNT: usize = 5;
const SPARK_SPREAD: (i32, i32) = (30, 20);

/// Random spark centres around the helmet
pub fn spark_positions(center: (i32, i32), rng: &mut impl Rng) -> [(i32, i32); SPARK_COUNT] {
    let (spread_x, spread_y) = SPARK_SPREAD;
    std::array::from_fn(|_| {
        (
            center.0 + rng.random_range(-spread_x..=spread_x),
            center.1 + rng.random_range(-spread_y..=spread_y),
        )
    })
}

/// Draws every stage unlocked by the current wrong-guess count
pub fn render(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    state: &GameState,
    rng: &mut impl Rng,
) -> Result<(), String> {
    for stage in revealed_stages(state.wrong_guesses()) {
        render_stage(canvas, config, stage, rng)?;
    }
    Ok(())
}

fn render_stage(
    canvas: &mut Canvas<Window>,
    config: &GameConfig,
    stage: RevealStage,
    rng: &mut impl Rng,
) -> Result<(), String> {
    let palette = &config.palette;
    let (x, y) = config.layout.astronaut;

    match stage {
        RevealStage::Helmet => {
            draw_circle(canvas, (x, y), 25, 3, palette.white)?;
            draw_circle(canvas, (x, y), 20, 2, palette.cyan)?;
            // Visor reflection
            draw_arc(canvas, (x, y), 15, 0.0, PI, 2, palette.blue)?;
        }
        RevealStage::Torso => {
            fill_rounded_rect(canvas, Rect::new(x - 15, y + 25, 30, 40), 5, palette.white)?;
            // Control panel
            canvas.set_draw_color(palette.red);
            canvas.fill_rect(Rect::new(x - 10, y + 30, 8, 8))?;
            canvas.set_draw_color(palette.green);
            canvas.fill_rect(Rect::new(x + 2, y + 30, 8, 8))?;
        }
        RevealStage::LeftArm => {
            draw_thick_line(canvas, (x - 15, y + 35), (x - 35, y + 50), LIMB_WIDTH, palette.white)?;
        }
        RevealStage::RightArm => {
            draw_thick_line(canvas, (x + 15, y + 35), (x + 35, y + 50), LIMB_WIDTH, palette.white)?;
        }
        RevealStage::LeftLeg => {
            draw_thick_line(canvas, (x - 8, y + 65), (x - 20, y + 90), LIMB_WIDTH, palette.white)?;
        }
        RevealStage::RightLeg => {
            draw_thick_line(canvas, (x + 8, y + 65), (x + 20, y + 90), LIMB_WIDTH, palette.white)?;
            for spark in spark_positions((x, y), rng) {
                fill_circle(canvas, spark, 2, palette.red)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sparks_stay_near_helmet() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            for (sx, sy) in spark_positions((225, 350), &mut rng) {
                assert!((195..=255).contains(&sx));
                assert!((330..=370).contains(&sy));
            }
        }
    }

    #[test]
    fn test_sparks_move_between_frames() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = spark_positions((0, 0), &mut rng);
        let second = spark_positions((0, 0), &mut rng);
        assert_ne!(first, second);
    }
}
