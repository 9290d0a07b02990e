// Domain layer - automaton engine
pub mod domain;

// Application layer - loop state and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Automaton, Cell, Grid, Statistics};
pub use application::{CellColor, Config, ConfigError, GameState, Settings, Viewport};
