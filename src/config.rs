//! Application configuration
//!
//! Settings are read from an optional TOML file. Every field has a
//! default, so an empty or missing file gives a working setup.

use crate::{MiseError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Color scheme for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// Completion chime settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    /// Whether to play a sound when a timer runs out
    pub enabled: bool,
    /// Tone frequency
    pub frequency_hz: f32,
    /// Gain at the start of the tone (0.0 to 1.0)
    pub peak_gain: f32,
    /// Gain the tone decays to
    pub floor_gain: f32,
    /// Tone length in milliseconds
    pub duration_ms: u64,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency_hz: 800.0,
            peak_gain: 0.3,
            floor_gain: 0.01,
            duration_ms: 500,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Length of one timer tick in milliseconds
    pub tick_interval_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub cue: CueConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Light,
            tick_interval_ms: 1000,
            window_width: 1100.0,
            window_height: 760.0,
            cue: CueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).map_err(|e| MiseError::ParseError {
            path: origin.to_string(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default location: `<config dir>/mise/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mise").join("config.toml"))
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else fall back to defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(MiseError::ConfigError(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(MiseError::ConfigError(
                "window size must be positive".to_string(),
            ));
        }

        let cue = &self.cue;
        if cue.frequency_hz <= 0.0 {
            return Err(MiseError::ConfigError(
                "cue.frequency_hz must be positive".to_string(),
            ));
        }
        if !(cue.floor_gain > 0.0 && cue.floor_gain < cue.peak_gain && cue.peak_gain <= 1.0) {
            return Err(MiseError::ConfigError(format!(
                "cue gains must satisfy 0 < floor_gain < peak_gain <= 1, got {} and {}",
                cue.floor_gain, cue.peak_gain
            )));
        }
        if cue.duration_ms == 0 {
            return Err(MiseError::ConfigError(
                "cue.duration_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Tick interval as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Disable the completion chime
    pub fn without_cue(mut self) -> Self {
        self.cue.enabled = false;
        self
    }

    /// Use a different tick length
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis().max(1) as u64;
        self
    }
}
