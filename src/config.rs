//! Session configuration.
//!
//! A [`GameConfig`] is built once at start-up and handed to the binary's
//! front end. Values come from environment variables, falling back to
//! defaults when a variable is unset.

use crate::error::ChessError;
use crate::game_repr::Color;

/// Front end settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side drawn at the bottom of the board (`CHESS_POV`)
    pub pov: Color,
    /// Draw pieces with Unicode chess symbols instead of letters (`CHESS_UNICODE`)
    pub unicode: bool,
    /// `env_logger` filter directives (`CHESS_LOG`)
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pov: Color::White,
            unicode: false,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Result<Self, ChessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChessError> {
        let mut config = GameConfig::default();

        if let Some(value) = lookup("CHESS_POV") {
            config.pov = match value.trim().to_ascii_lowercase().as_str() {
                "white" | "w" => Color::White,
                "black" | "b" => Color::Black,
                _ => return Err(ChessError::InvalidConfig { key: "CHESS_POV", value }),
            };
        }

        if let Some(value) = lookup("CHESS_UNICODE") {
            config.unicode = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ChessError::InvalidConfig { key: "CHESS_UNICODE", value }),
            };
        }

        if let Some(value) = lookup("CHESS_LOG") {
            if !value.trim().is_empty() {
                config.log_filter = value.trim().to_string();
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.pov, Color::White);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("CHESS_POV", "Black"),
            ("CHESS_UNICODE", "1"),
            ("CHESS_LOG", "chess_rules=debug"),
        ]))
        .unwrap();

        assert_eq!(config.pov, Color::Black);
        assert!(config.unicode);
        assert_eq!(config.log_filter, "chess_rules=debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_lookup(lookup(&[("CHESS_POV", "green")])).unwrap_err();
        assert!(matches!(err, ChessError::InvalidConfig { key: "CHESS_POV", .. }));

        let err = GameConfig::from_lookup(lookup(&[("CHESS_UNICODE", "maybe")])).unwrap_err();
        assert!(matches!(err, ChessError::InvalidConfig { key: "CHESS_UNICODE", .. }));
    }
}
