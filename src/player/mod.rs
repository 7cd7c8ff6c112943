//! Registered players, their records and the ranking.

pub mod legacy;
pub mod manager;
pub mod types;

pub use manager::PlayerManager;
pub use types::Player;
