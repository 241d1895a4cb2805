//! Configuration management and environment variable loading
//!
//! The string helpers are pure and take their options explicitly. This
//! module lets an application pick crate-wide defaults for those options
//! from the environment (or a `.env` file) once, and build option structs
//! from them.

use crate::random::{random_string_with, DEFAULT_CHARSET, DEFAULT_RANDOM_LENGTH};
use crate::similarity::closest_match;
use crate::slug::SlugifyOptions;
use crate::truncate::TruncateOptions;
use crate::{Result, TextkitError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment key for [`TextkitConfig::truncate_suffix`]
pub const ENV_TRUNCATE_SUFFIX: &str = "TEXTKIT_TRUNCATE_SUFFIX";
/// Environment key for [`TextkitConfig::slug_separator`]
pub const ENV_SLUG_SEPARATOR: &str = "TEXTKIT_SLUG_SEPARATOR";
/// Environment key for [`TextkitConfig::random_length`]
pub const ENV_RANDOM_LENGTH: &str = "TEXTKIT_RANDOM_LENGTH";
/// Environment key for [`TextkitConfig::random_charset`]
pub const ENV_RANDOM_CHARSET: &str = "TEXTKIT_RANDOM_CHARSET";
/// Environment key for [`TextkitConfig::similarity_threshold`]
pub const ENV_SIMILARITY_THRESHOLD: &str = "TEXTKIT_SIMILARITY_THRESHOLD";

/// Load environment variables from .env file
///
/// Looks in the current directory and its parents. A missing file is not an
/// error; a malformed one is.
///
/// # Example
///
/// ```no_run
/// use textkit_core::load_env;
///
/// load_env().ok();
/// let config = textkit_core::TextkitConfig::from_env().unwrap_or_default();
/// ```
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("Loaded environment from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::LineParse(line, pos)) => Err(TextkitError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => {
            tracing::warn!("No .env file found - using system environment variables only");
            Ok(())
        }
        Err(e) => Err(TextkitError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

/// Load environment variables from a specific file
pub fn load_env_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    match dotenvy::from_path(path.as_ref()) {
        Ok(_) => {
            tracing::info!("Loaded environment from: {}", path.as_ref().display());
            Ok(())
        }
        Err(e) => Err(TextkitError::config(format!(
            "Failed to load {} environment file: {}",
            path.as_ref().display(),
            e
        ))),
    }
}

/// Get optional environment variable with default
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get environment variable as boolean
pub fn get_env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| match v.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

/// Get environment variable as integer
pub fn get_env_int<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Crate-wide defaults for the string helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextkitConfig {
    /// Suffix appended by truncation
    pub truncate_suffix: String,
    /// Separator used between slug words
    pub slug_separator: String,
    /// Length of generated random strings
    pub random_length: usize,
    /// Characters random strings are drawn from
    pub random_charset: String,
    /// Minimum similarity for a closest-match suggestion
    pub similarity_threshold: f64,
}

impl Default for TextkitConfig {
    fn default() -> Self {
        Self {
            truncate_suffix: "...".to_string(),
            slug_separator: "-".to_string(),
            random_length: DEFAULT_RANDOM_LENGTH,
            random_charset: DEFAULT_CHARSET.to_string(),
            similarity_threshold: 0.6,
        }
    }
}

impl TextkitConfig {
    /// Read configuration from the process environment
    ///
    /// Unset keys keep their defaults. Values that fail to parse or
    /// validate are errors rather than silently ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(suffix) = lookup(ENV_TRUNCATE_SUFFIX) {
            config.truncate_suffix = suffix;
        }
        if let Some(separator) = lookup(ENV_SLUG_SEPARATOR) {
            config.slug_separator = separator;
        }
        if let Some(raw) = lookup(ENV_RANDOM_LENGTH) {
            config.random_length = raw.trim().parse().map_err(|_| {
                TextkitError::invalid_value(
                    ENV_RANDOM_LENGTH,
                    &raw,
                    "expected a non-negative integer",
                )
            })?;
        }
        if let Some(charset) = lookup(ENV_RANDOM_CHARSET) {
            config.random_charset = charset;
        }
        if let Some(raw) = lookup(ENV_SIMILARITY_THRESHOLD) {
            config.similarity_threshold = raw.trim().parse().map_err(|_| {
                TextkitError::invalid_value(ENV_SIMILARITY_THRESHOLD, &raw, "expected a number")
            })?;
        }

        config.validate()?;
        tracing::debug!(?config, "Loaded textkit configuration");
        Ok(config)
    }

    /// Reject values the helpers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.slug_separator.is_empty() {
            return Err(TextkitError::validation("slug separator must not be empty"));
        }
        if self.random_charset.is_empty() {
            return Err(TextkitError::validation(
                "random string charset must not be empty",
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(TextkitError::invalid_value(
                ENV_SIMILARITY_THRESHOLD,
                self.similarity_threshold.to_string(),
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Truncation options using the configured suffix
    pub fn truncate_options(&self, length: usize) -> TruncateOptions {
        TruncateOptions::new(length).with_suffix(self.truncate_suffix.clone())
    }

    /// Slug options using the configured separator
    pub fn slugify_options(&self) -> SlugifyOptions {
        SlugifyOptions {
            separator: self.slug_separator.clone(),
            ..Default::default()
        }
    }

    /// Random string with the configured length and charset
    pub fn random_string(&self) -> Result<String> {
        random_string_with(self.random_length, &self.random_charset)
    }

    /// Closest match using the configured threshold
    pub fn closest_match<'a, I>(&self, target: &str, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        closest_match(target, candidates, self.similarity_threshold)
    }
}
