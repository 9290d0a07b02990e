mod config;
mod game_state;
mod palette;
mod viewport;

pub use config::{Config, ConfigError, Settings};
pub use game_state::{GameState, SPEED_STEP_MS};
pub use palette::CellColor;
pub use viewport::Viewport;
