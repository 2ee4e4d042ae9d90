//! Scene Illustration
//!
//! The parts of the frame that depict the story rather than report the game:
//! the space backdrop, the energy rig and the astronaut.
//!
//! Every renderer borrows the game state immutably and draws with procedural
//! SDL2 primitives (see `shapes`). Draw order is decided by `render::Layer`.
//!
//! # Available Components
//!
//! - [`background`] - Gradient sky and twinkling stars
//! - [`rig`] - Energy platform and tether
//! - [`astronaut`] - Astronaut stages for the current wrong-guess count

pub mod astronaut;
pub mod background;
pub mod rig;
