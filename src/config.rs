use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::Board;

/// Largest board the terminal view is laid out for.
pub const MAX_RADIUS: i32 = Board::MAX_RADIUS;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Half-width of the bounding square
    pub radius: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { radius: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Number of sides for the built-in starting position (2, 3 or 4)
    pub players: u8,
    /// Initial-position file; overrides `players` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            players: 2,
            path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
    /// Write log records here instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Where [`AppConfig::load_or_default`] got its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub setup: SetupConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Logging is usually not set up yet, so the caller
    /// reports the fallback.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.radius < 1 {
            return Err(ConfigError::Validation(
                "board.radius must be >= 1".into(),
            ));
        }
        if self.board.radius > MAX_RADIUS {
            return Err(ConfigError::Validation(format!(
                "board.radius must be <= {MAX_RADIUS}"
            )));
        }
        if !(2..=4).contains(&self.setup.players) {
            return Err(ConfigError::Validation(format!(
                "setup.players must be 2, 3 or 4 (got {})",
                self.setup.players
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.log.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not a log level",
                self.log.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
