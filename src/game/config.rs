//! Session options.

use std::fmt;

/// Tunable session behaviour.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SessionConfig {
    /// Hand the turn to the loser after a king capture ends the game.
    ///
    /// The flip is unobservable through play because post-game clicks are
    /// ignored, but it shows in `current_player`. Defaults to `true`.
    pub flip_turn_on_game_over: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            flip_turn_on_game_over: true,
        }
    }
}

/// Error type for option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No option with this name
    UnknownOption { name: String },
    /// Value could not be parsed for the option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl SessionConfig {
    /// Option names accepted by [`SessionConfig::apply_option`].
    pub const OPTION_NAMES: [&'static str; 1] = ["flip_turn_on_game_over"];

    /// Update an option by name. Names are case-insensitive and may use
    /// spaces or dashes in place of underscores.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "flip_turn_on_game_over" => {
                self.flip_turn_on_game_over =
                    parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    })?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip_turn_on_game_over = {}", self.flip_turn_on_game_over)
    }
}
