//! Screen-Space GUI System
//!
//! UI elements drawn at fixed screen positions on top of the scene.
//!
//! Screen-space GUI elements:
//! - Use screen coordinates (pixels from screen edges)
//! - Read the game state but never mutate it
//! - Use procedural rendering (bitmap font, SDL2 primitives)
//!
//! # Available Components
//!
//! - [`hud`] - Instructions, masked word, wrong letters, life support
//! - [`GameOverScreen`] - Dimmed overlay with the round outcome and restart hint
//!
//! # Example Usage
//!
//! ```ignore
//! let game_over = GameOverScreen::new(&config);
//!
//! // In the render loop
//! hud::render(&mut canvas, &config, &state)?;
//! game_over.render(&mut canvas, &config, &state)?;
//! ```

pub mod game_over;
pub mod hud;

pub use game_over::GameOverScreen;
