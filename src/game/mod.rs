//! The play field simulation.
//!
//! A dragon flies through scrolling pipe columns; flapping pushes it up and
//! gravity pulls it down. Touching a pipe, the floor or the ceiling ends the
//! run. Every 15 points the run advances to the next of seven levels.

pub mod bird;
pub mod level;
pub mod object;
pub mod pipe;
pub mod scenario;
pub mod score;

pub use bird::Bird;
pub use level::LevelTheme;
pub use object::{Bounds, GameObject};
pub use pipe::Pipe;
pub use scenario::{CrashCause, Scenario, ScenarioEvent};
pub use score::ScoreManager;
