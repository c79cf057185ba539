//! Game configuration.
//!
//! Values come from an optional TOML file. Missing keys fall back to a
//! half-second AI "thinking" pause, a half-second pause before the game-over
//! summary and the quick end-of-game rule.

use std::path::Path;
use std::time::Duration;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tunables for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause between the AI choosing its move and the move landing on the board.
    pub ai_delay_ms: u64,

    /// Pause between detecting the end of a game and publishing the summary.
    pub game_over_delay_ms: u64,

    /// Use proper pass / double-pass end detection instead of the
    /// "no move before step 60" shortcut.
    pub strict_end_detection: bool,

    /// Highlight the human's legal moves on the board.
    pub show_legal_moves: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            game_over_delay_ms: 500,
            strict_end_detection: false,
            show_legal_moves: true,
        }
    }
}

impl GameConfig {
    /// Zero delays; scheduled actions fire on the next tick.
    pub fn instant() -> Self {
        Self {
            ai_delay_ms: 0,
            game_over_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded");
        Ok(config)
    }
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {}", message)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
        assert_eq!(config.game_over_delay(), Duration::from_millis(500));
        assert!(!config.strict_end_detection);
        assert!(config.show_legal_moves);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("strict_end_detection = true\n").unwrap();
        assert!(config.strict_end_detection);
        assert_eq!(config.ai_delay_ms, 500);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = GameConfig::from_toml_str("ai_delay_ms = \"soon\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ai_delay_ms = 250").unwrap();
        writeln!(file, "show_legal_moves = false").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ai_delay_ms, 250);
        assert!(!config.show_legal_moves);
        assert_eq!(config.game_over_delay_ms, 500);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
