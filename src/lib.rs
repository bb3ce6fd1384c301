// Domain layer - the automaton: live sets, the rule, stepping, patterns
pub mod domain;

// Application layer - demos, settings and the generation counter
pub mod application;

// Infrastructure layer - terminal rendering, operator input, menu text
pub mod rendering;
pub mod input;
pub mod ui;

pub mod error;

// Re-exports for convenience
pub use domain::{Algorithm, Coord, LiveSet, Pattern, advance, merge, presets};
pub use application::{Demo, GameState, PatternConfig, Settings, Viewport};
pub use error::{Error, Result};
