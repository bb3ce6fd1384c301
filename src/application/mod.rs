pub mod config;
mod game_state;
mod viewport;

pub use config::{Demo, PatternConfig, RunMode, Settings};
pub use game_state::GameState;
pub use viewport::Viewport;
