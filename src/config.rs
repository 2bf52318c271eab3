//! # Configuration
//!
//! Server settings read from the environment. The binary loads `.env` with
//! `dotenvy` before calling [`Config::from_env`].
//!
//! ## Environment Variables
//!
//! - `APP_HOST` - Bind host, defaults to [`DEFAULT_HOST`]
//! - `APP_PORT` - Bind port, defaults to [`DEFAULT_PORT`]
//! - `SEED_RECIPES` - Start with the fixture recipes (`true`/`false`/`1`/`0`), defaults to `true`

use std::env;

use thiserror::Error;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_recipes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            seed_recipes: true,
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("APP_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("APP_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "APP_PORT",
                value: port.clone(),
                reason: "expected a port number",
            })?;
        }

        if let Some(seed) = lookup("SEED_RECIPES") {
            config.seed_recipes = parse_bool(&seed).ok_or(ConfigError::Invalid {
                key: "SEED_RECIPES",
                value: seed.clone(),
                reason: "expected true, false, 1 or 0",
            })?;
        }

        Ok(config)
    }

    /// Returns the `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
