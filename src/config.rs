use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::snake::Position;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of cells per side of the square field.
pub const DEFAULT_FIELD_SIZE: u16 = 25;

/// Default terminal columns drawn per grid cell.
pub const DEFAULT_PIXEL_SIZE: u16 = 2;

/// Base tick interval in milliseconds (5 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Fastest tick interval accepted from configuration.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Largest accepted field size.
pub const MAX_FIELD_SIZE: u16 = 200;

/// Largest accepted pixel size.
pub const MAX_PIXEL_SIZE: u16 = 8;

/// Length the snake grows to on its own at the start of every round.
pub const TOTAL_LENGTH: usize = 5;

/// Number of cells the snake starts a round with.
pub const INITIAL_SNAKE_LENGTH: usize = 1;

/// Score granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `size` cells per side.
    #[must_use]
    pub fn square(size: u16) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Center cell, rounding down on even sides.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Runtime options for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Cells per side of the square field.
    pub field_size: u16,
    /// Terminal columns per cell. Rows are always one per cell.
    pub pixel_size: u16,
    /// Period between simulation ticks.
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            pixel_size: DEFAULT_PIXEL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Values given on the command line, applied on top of the file config.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ConfigOverrides {
    pub field_size: Option<u16>,
    pub pixel_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        GridSize::square(self.field_size)
    }

    /// Returns a copy with every set override applied.
    #[must_use]
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            field_size: overrides.field_size.unwrap_or(self.field_size),
            pixel_size: overrides.pixel_size.unwrap_or(self.pixel_size),
            tick_interval_ms: overrides.tick_interval_ms.unwrap_or(self.tick_interval_ms),
        }
    }

    /// Rejects values the game loop or renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_FIELD_SIZE).contains(&self.field_size) {
            return Err(ConfigError::Invalid(format!(
                "field_size must be between 1 and {MAX_FIELD_SIZE}, got {}",
                self.field_size
            )));
        }

        if !(1..=MAX_PIXEL_SIZE).contains(&self.pixel_size) {
            return Err(ConfigError::Invalid(format!(
                "pixel_size must be between 1 and {MAX_PIXEL_SIZE}, got {}",
                self.pixel_size
            )));
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "tick_interval_ms must be at least {MIN_TICK_INTERVAL_MS}, got {}",
                self.tick_interval_ms
            )));
        }

        Ok(())
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Loads the game configuration.
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and a missing file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => read_config_file(path),
        None => {
            let path = default_config_path();
            match read_config_file(&path) {
                Err(ConfigError::Read { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    Ok(GameConfig::default())
                }
                other => other,
            }
        }
    }
}

fn read_config_file(path: &Path) -> Result<GameConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(raw: &str) -> Result<GameConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Empty play-area cells.
    pub field_bg: Color,
    pub border_fg: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub score_fg: Color,
    /// Background laid over the field while the game-over popup is shown.
    pub overlay_bg: Color,
    pub overlay_fg: Color,
}

/// Muted green field with a dark head, the only theme shipped.
pub const THEME_FIELD: Theme = Theme {
    field_bg: Color::Rgb(0xa9, 0xb6, 0xa9),
    border_fg: Color::Rgb(0x3a, 0x4f, 0x41),
    snake_head: Color::Rgb(0x1f, 0x5b, 0x1f),
    snake_body: Color::Rgb(0x52, 0x60, 0x52),
    food: Color::Rgb(0xa6, 0x3a, 0x3a),
    score_fg: Color::Rgb(0x52, 0x60, 0x52),
    overlay_bg: Color::Rgb(0x32, 0x37, 0x32),
    overlay_fg: Color::Rgb(0xa9, 0xb6, 0xa9),
};

/// Glyph used to paint one solid grid cell column.
pub const GLYPH_CELL: &str = " ";

/// Head markers, drawn in the first column of the head cell.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
