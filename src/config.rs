//! Configuration management for the address book bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so the bot runs without any setup.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;

/// Largest accepted birthday lookahead, in days.
pub const MAX_BIRTHDAY_WINDOW_DAYS: i64 = 365;

/// Configuration for the address book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,

    /// Lookahead of the `birthdays` command in days (default: 7)
    pub birthday_window_days: i64,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday lookahead, 0-365 (default: 7)
    /// - `BOT_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if !(0..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("BOT_PROMPT").unwrap_or(defaults.prompt);

        Ok(Config {
            log_level,
            birthday_window_days,
            prompt,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
        }
    }
}
