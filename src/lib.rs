//! Traveling Dragon - a terminal arcade game.
//!
//! Guide a dragon through scrolling pipe gaps across seven levels. Players
//! are identified by nickname; their matches and best scores feed a local
//! ranking.

pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod player;
pub mod resolution;
pub mod settings;
pub mod ui;
pub mod utils;

pub use error::{GameError, Result};
