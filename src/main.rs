use std::time::Instant;

use log::info;

mod config;
mod error;
mod frame_pacer;
mod game;
mod gui;
mod input_system;
mod render;
mod scene;
mod shapes;
mod starfield;
mod text;

use config::GameConfig;
use error::GameError;
use frame_pacer::FramePacer;
use game::{GameState, LoopControl, RandomPicker, apply_action};
use input_system::InputSystem;
use render::FrameRenderer;
use starfield::StarField;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();

    let sdl_context = sdl2::init().map_err(GameError::SdlInit)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Video)?;

    let window = video_subsystem
        .window(&config.title, config.width, config.height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Window(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Canvas(e.to_string()))?;

    let mut event_pump = sdl_context.event_pump().map_err(GameError::EventPump)?;

    // Letters arrive as TextInput events
    video_subsystem.text_input().start();

    info!("Window: {}x{} @ {} fps", config.width, config.height, config.fps);

    let stars = StarField::generate(config.width, config.height, config.star_count, &mut rand::rng());
    info!("Generated {} stars", stars.stars().len());

    let mut picker = RandomPicker::new();
    let mut game_state = GameState::new(&mut picker);

    let input_system = InputSystem::new();
    let mut frame_renderer = FrameRenderer::new(&config);
    let mut frame_pacer = FramePacer::new(config.fps);
    let started = Instant::now();
    info!("Frame budget: {:?}", frame_pacer.frame_duration());

    println!("Controls:");
    println!("A-Z - Guess a letter");
    println!("5 - Start a new round");
    println!("ESC - Quit");

    'running: loop {
        // Handle events
        for action in input_system.poll_events(&mut event_pump) {
            if apply_action(&mut game_state, &mut picker, &action) == LoopControl::Quit {
                break 'running;
            }
        }

        let ticks_ms = started.elapsed().as_millis() as u64;
        frame_renderer.render(&mut canvas, &config, &game_state, &stars, ticks_ms)?;
        canvas.present();

        // Cap framerate
        frame_pacer.wait();
    }

    info!("Shutting down");
    Ok(())
}
