use clap::Parser;
use thiserror::Error;
use tracing::warn;

use super::CellColor;

/// Errors raised while validating startup parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },
    #[error("window of {width}x{height} cells at {cell_size}px does not fit on screen")]
    WindowTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },
}

/// Simulation parameters as entered on the command line or environment.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "immortal-life",
    version,
    about = "Conway's Game of Life with immortal cells"
)]
pub struct Config {
    /// Grid width in cells.
    #[arg(long, env = "LIFE_WIDTH", default_value_t = 100, allow_negative_numbers = true)]
    pub width: i64,

    /// Grid height in cells.
    #[arg(long, env = "LIFE_HEIGHT", default_value_t = 100, allow_negative_numbers = true)]
    pub height: i64,

    /// Cell size in pixels.
    #[arg(long, env = "LIFE_CELL_SIZE", default_value_t = 8, allow_negative_numbers = true)]
    pub cell_size: i64,

    /// Initial simulation interval in milliseconds.
    #[arg(long, env = "LIFE_INTERVAL_MS", default_value_t = 100, allow_negative_numbers = true)]
    pub interval_ms: i64,

    /// Initial cell color: 1 Green, 2 Red, 3 Blue, 4 Yellow, 5 Cyan.
    #[arg(long, env = "LIFE_COLOR", default_value_t = 1, allow_negative_numbers = true)]
    pub color: i64,
}

/// Validated parameters, ready to build the window and automaton from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub interval_ms: u32,
    pub color: CellColor,
}

impl Settings {
    /// Window size in pixels
    pub fn window_size(&self) -> (i32, i32) {
        // validate() guarantees both products fit
        let px = |cells: usize| cells as i32 * self.cell_size as i32;
        (px(self.width), px(self.height))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            cell_size: 8,
            interval_ms: 100,
            color: 1,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let width = positive("width", self.width)?;
        let height = positive("height", self.height)?;
        let cell_size = positive("cell size", self.cell_size)?;
        let interval_ms = positive("interval", self.interval_ms)?;

        let too_large = || ConfigError::WindowTooLarge {
            width: width as usize,
            height: height as usize,
            cell_size: cell_size as u32,
        };
        let cell_size = u32::try_from(cell_size).map_err(|_| too_large())?;
        let fits = |cells: u64| {
            cells
                .checked_mul(u64::from(cell_size))
                .is_some_and(|px| px <= i32::MAX as u64)
        };
        if !fits(width) || !fits(height) {
            return Err(too_large());
        }

        let color = u8::try_from(self.color)
            .ok()
            .and_then(CellColor::from_choice)
            .unwrap_or_else(|| {
                warn!(choice = self.color, "Invalid color choice, using default (Green)");
                CellColor::default()
            });

        Ok(Settings {
            width: width as usize,
            height: height as usize,
            cell_size,
            interval_ms: u32::try_from(interval_ms).unwrap_or(u32::MAX),
            color,
        })
    }
}

fn positive(name: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or(ConfigError::NonPositive { name, value })
}
