//! Rules engine for a two-player chess game.
//!
//! [`game_repr`] holds the engine proper: board queries, per-piece move
//! generation with self-check filtering, check and checkmate detection and
//! the undoable command log. [`board::Board`] drives one session from
//! square clicks and hands each frame to a [`renderer::Renderer`].

pub mod assets;
pub mod board;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod input;
pub mod renderer;

pub use error::ChessError;
