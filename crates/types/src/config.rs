//! Game configuration
//!
//! Options are read from an optional JSON file and then overridden by
//! environment variables:
//!
//! - `TILE_MATCH_CONFIG`: path to a JSON file with any of the fields below
//! - `TILE_MATCH_WIDTH`: grid columns (default: 6)
//! - `TILE_MATCH_HEIGHT`: grid rows (default: 5)
//! - `TILE_MATCH_COLORS`: palette size (default: 6)
//! - `TILE_MATCH_STEP_DELAY_MS`: pause between cascade steps (default: 300)
//! - `TILE_MATCH_MAX_CASCADE`: gravity step cap per cascade (default: 64)
//! - `TILE_MATCH_SEED`: RNG seed (default: derived from the clock by the binary)
//!
//! The JSON file uses camelCase names:
//!
//! ```json
//! {"width": 7, "height": 6, "colorCount": 5, "stepDelayMs": 150}
//! ```

use std::path::Path;
use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_COLOR_COUNT, DEFAULT_HEIGHT, DEFAULT_STEP_DELAY_MS, DEFAULT_WIDTH, MAX_BOARD_SIDE,
    MAX_CASCADE_STEPS, PALETTE,
};

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("board width must be in 1..={max}, got {value}")]
    Width { value: u8, max: u8 },
    #[display("board height must be in 1..={max}, got {value}")]
    Height { value: u8, max: u8 },
    #[display("color count must be in 2..={max}, got {value}")]
    ColorCount { value: u8, max: u8 },
    #[display("max cascade steps must be in 1..={max}, got {value}")]
    MaxCascadeSteps { value: usize, max: usize },
    #[display("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[display("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Board shape, palette size and cascade pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub step_delay_ms: u32,
    pub max_cascade_steps: usize,
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color_count: DEFAULT_COLOR_COUNT,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            max_cascade_steps: MAX_CASCADE_STEPS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// Unparsable override values are ignored and leave the previous value in
    /// place. The result is validated before it is returned.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("TILE_MATCH_CONFIG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(v) = parse_var(&lookup, "TILE_MATCH_WIDTH") {
            config.width = v;
        }
        if let Some(v) = parse_var(&lookup, "TILE_MATCH_HEIGHT") {
            config.height = v;
        }
        if let Some(v) = parse_var(&lookup, "TILE_MATCH_COLORS") {
            config.color_count = v;
        }
        if let Some(v) = parse_var(&lookup, "TILE_MATCH_STEP_DELAY_MS") {
            config.step_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "TILE_MATCH_MAX_CASCADE") {
            config.max_cascade_steps = v;
        }
        if let Some(v) = parse_var(&lookup, "TILE_MATCH_SEED") {
            config.seed = Some(v);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_BOARD_SIDE {
            return Err(ConfigError::Width {
                value: self.width,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.height == 0 || self.height > MAX_BOARD_SIDE {
            return Err(ConfigError::Height {
                value: self.height,
                max: MAX_BOARD_SIDE,
            });
        }
        let max_colors = PALETTE.len() as u8;
        if self.color_count < 2 || self.color_count > max_colors {
            return Err(ConfigError::ColorCount {
                value: self.color_count,
                max: max_colors,
            });
        }
        if self.max_cascade_steps == 0 || self.max_cascade_steps > MAX_CASCADE_STEPS {
            return Err(ConfigError::MaxCascadeSteps {
                value: self.max_cascade_steps,
                max: MAX_CASCADE_STEPS,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Parse a trimmed variable; missing or unparsable values read as `None`
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
