//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::book::{LeapDayPolicy, DEFAULT_WINDOW_DAYS};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days ahead covered by the upcoming birthday report (default: 7)
    pub upcoming_window_days: u32,

    /// How 29 February birthdays are handled in non-leap years (default: march1)
    pub leap_day_policy: LeapDayPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_UPCOMING_DAYS`: birthday window in days (default: 7)
    /// - `CONTACT_BOOK_LEAP_DAY_POLICY`: `march1`, `feb28` or `skip` (default: `march1`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days =
            Self::parse_env_u32("CONTACT_BOOK_UPCOMING_DAYS", DEFAULT_WINDOW_DAYS)?;

        let leap_day_policy = match env::var("CONTACT_BOOK_LEAP_DAY_POLICY") {
            Ok(val) => val
                .parse::<LeapDayPolicy>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_LEAP_DAY_POLICY".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => LeapDayPolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_window_days,
            leap_day_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: DEFAULT_WINDOW_DAYS,
            leap_day_policy: LeapDayPolicy::default(),
            log_level: "error".to_string(),
        }
    }
}
