// src/config.rs
use crate::domain::slug::config::DEFAULT_MAX_ITERATIONS;
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_max_iterations: u32,
    slug_save_retries: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://slugged.db".into()
}

fn default_max_connections() -> u32 {
    5
}

fn default_save_retries() -> u32 {
    3
}

/// Parses `raw` for `key`, falling back to `default` when the key is unset.
fn parse_value<T: FromStr>(key: &str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = parse_value(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS").as_deref(),
            default_max_connections(),
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let slug_max_iterations = parse_value(
            "SLUG_MAX_ITERATIONS",
            lookup("SLUG_MAX_ITERATIONS").as_deref(),
            DEFAULT_MAX_ITERATIONS,
        )?;
        if slug_max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_ITERATIONS must be at least 1".into(),
            ));
        }

        let slug_save_retries = parse_value(
            "SLUG_SAVE_RETRIES",
            lookup("SLUG_SAVE_RETRIES").as_deref(),
            default_save_retries(),
        )?;

        Ok(Self {
            database_url,
            database_max_connections,
            slug_max_iterations,
            slug_save_retries,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Upper bound on slug candidates probed per save.
    pub fn slug_max_iterations(&self) -> u32 {
        self.slug_max_iterations
    }

    /// Extra save attempts after a slug unique-index conflict.
    pub fn slug_save_retries(&self) -> u32 {
        self.slug_save_retries
    }
}
