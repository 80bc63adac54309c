//! Configuration management module
//!
//! Handles loading, saving, and validation of game settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::game::Symbol;
use crate::{MemoraError, Result, APP_NAME, CONFIG_FILE};

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles dealt on the board (must be even)
    pub tile_count: usize,
    /// Number of tile columns in the grid
    pub columns: usize,
    /// How long a flipped pair stays face-up before it settles
    #[serde(with = "humantime_serde")]
    pub resolution_delay: Duration,
    /// Input poll interval of the terminal loop
    #[serde(with = "humantime_serde")]
    pub tick_rate: Duration,
    /// Fixed RNG seed for reproducible boards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 6,
            columns: 2,
            resolution_delay: Duration::from_millis(1000),
            tick_rate: Duration::from_millis(100),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tile_count < 2 {
            return Err(MemoraError::ConfigError(
                "Tile count must be at least 2".to_string()
            ));
        }

        if self.tile_count % 2 != 0 {
            return Err(MemoraError::ConfigError(
                format!("Tile count must be even: {}", self.tile_count)
            ));
        }

        let max_tiles = Symbol::CATALOG.len() * 2;
        if self.tile_count > max_tiles {
            return Err(MemoraError::ConfigError(
                format!("Too many tiles: {} (max: {})", self.tile_count, max_tiles)
            ));
        }

        if self.columns == 0 {
            return Err(MemoraError::ConfigError(
                "Column count must be greater than 0".to_string()
            ));
        }

        if self.columns > self.tile_count {
            return Err(MemoraError::ConfigError(
                format!("Too many columns: {} for {} tiles", self.columns, self.tile_count)
            ));
        }

        if self.resolution_delay.is_zero() {
            return Err(MemoraError::ConfigError(
                "Resolution delay must be greater than 0".to_string()
            ));
        }

        const MAX_DELAY: Duration = Duration::from_secs(10);
        if self.resolution_delay > MAX_DELAY {
            return Err(MemoraError::ConfigError(
                format!("Resolution delay too long: {} (max: {})",
                    humantime::format_duration(self.resolution_delay),
                    humantime::format_duration(MAX_DELAY))
            ));
        }

        const MIN_TICK: Duration = Duration::from_millis(10);
        const MAX_TICK: Duration = Duration::from_secs(1);
        if self.tick_rate < MIN_TICK || self.tick_rate > MAX_TICK {
            return Err(MemoraError::ConfigError(
                format!("Tick rate must be between {} and {}",
                    humantime::format_duration(MIN_TICK),
                    humantime::format_duration(MAX_TICK))
            ));
        }

        Ok(())
    }

    /// Set the number of tiles
    pub fn with_tile_count(mut self, count: usize) -> Self {
        self.tile_count = count;
        self
    }

    /// Set the number of grid columns
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the pair resolution delay
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Set the terminal tick rate
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| MemoraError::ConfigError(
                format!("Failed to read config file {}: {}", config_path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| MemoraError::ConfigError(
                format!("Failed to parse config file {}: {}", config_path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MemoraError::ConfigError(
                    format!("Failed to create config directory {}: {}", parent.display(), e)
                ))?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content)
            .map_err(|e| MemoraError::ConfigError(
                format!("Failed to write config file {}: {}", config_path.display(), e)
            ))?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/memora/memora.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MemoraError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Serde adapter storing durations as humantime strings ("1s", "250ms")
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}
