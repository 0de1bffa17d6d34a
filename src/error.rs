//! Error types for the Mise application

use thiserror::Error;

/// Mise application errors
#[derive(Error, Debug, Clone)]
pub enum MiseError {
    /// Audio device initialization or playback error
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Recipe content failed validation
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Scenario script is malformed
    #[error("Scenario error: {0}")]
    ScenarioError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// TOML parse error
    #[error("Failed to parse '{path}': {error}")]
    ParseError { path: String, error: String },
}

impl From<std::io::Error> for MiseError {
    fn from(e: std::io::Error) -> Self {
        MiseError::IOError(e.to_string())
    }
}

impl MiseError {
    /// Check if this error is recoverable
    ///
    /// The walkthrough keeps running after a recoverable error; the others
    /// stop startup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The chime is best-effort, the visual state is authoritative
            MiseError::AudioDeviceError(_) => true,
            MiseError::ConfigError(_) => false,
            MiseError::InvalidRecipe(_) => false,
            MiseError::ScenarioError(_) => false,
            MiseError::IOError(_) => false,
            MiseError::ParseError { .. } => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            MiseError::AudioDeviceError(_) => {
                "No sound available. Timers will still show when time is up.".to_string()
            }
            MiseError::ConfigError(_) => "Configuration error. Please check settings.".to_string(),
            MiseError::InvalidRecipe(reason) => format!("This recipe can't be used: {}", reason),
            MiseError::ScenarioError(_) => "The scenario script is invalid.".to_string(),
            MiseError::IOError(_) => "File system error occurred.".to_string(),
            MiseError::ParseError { path, .. } => format!("Could not read '{}'.", path),
        }
    }
}

/// Result type alias for Mise operations
pub type Result<T> = std::result::Result<T, MiseError>;
