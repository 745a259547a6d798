//! Core engine types: RNG, configuration and turn state.

pub mod config;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use rng::GameRng;
pub use state::GameState;
