//! Tracker configuration
//!
//! A [`TrackerConfig`] carries the output switches of an
//! [`AssertionTracker`](crate::tracker::AssertionTracker). It can be built in
//! code, deserialized from any serde format, or read from the environment.

use crate::constants::{ENV_FANCY, ENV_NO_COLOR, ENV_VERBOSE};
use serde::{Deserialize, Serialize};

/// Output switches for an assertion tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Print a line for every passing assertion, not just failures
    pub verbose: bool,
    /// Use Unicode glyphs instead of plain ASCII markers
    pub fancy: bool,
    /// Wrap markers and failing summaries in ANSI color codes
    pub color: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            fancy: false,
            color: true,
        }
    }
}

/// Errors raised while loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: expected one of 1/0, true/false, yes/no, on/off")]
    InvalidFlag { var: String, value: String },
}

impl TrackerConfig {
    pub fn new(verbose: bool, fancy: bool) -> Self {
        Self {
            verbose,
            fancy,
            ..Self::default()
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// `UNIT_TALLY_VERBOSE` and `UNIT_TALLY_FANCY` take boolean words;
    /// the presence of `NO_COLOR` disables color.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TrackerConfig::from_env`] over an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_VERBOSE) {
            config.verbose = parse_flag(ENV_VERBOSE, &value)?;
        }
        if let Some(value) = lookup(ENV_FANCY) {
            config.fancy = parse_flag(ENV_FANCY, &value)?;
        }
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }
        Ok(config)
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert!(!config.verbose);
        assert!(!config.fancy);
        assert!(config.color);
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_flag_words() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (ENV_VERBOSE, "Yes"),
            (ENV_FANCY, "on"),
        ]))
        .unwrap();
        assert!(config.verbose);
        assert!(config.fancy);

        let config = TrackerConfig::from_lookup(lookup_from(&[
            (ENV_VERBOSE, "0"),
            (ENV_FANCY, "FALSE"),
        ]))
        .unwrap();
        assert!(!config.verbose);
        assert!(!config.fancy);
    }

    #[test]
    fn test_no_color_presence_disables_color() {
        let config = TrackerConfig::from_lookup(lookup_from(&[(ENV_NO_COLOR, "")])).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn test_invalid_flag_is_reported() {
        let err = TrackerConfig::from_lookup(lookup_from(&[(ENV_FANCY, "sometimes")]))
            .unwrap_err();
        let ConfigError::InvalidFlag { var, value } = &err;
        assert_eq!(var, ENV_FANCY);
        assert_eq!(value, "sometimes");
        assert!(err.to_string().contains("UNIT_TALLY_FANCY"));
    }
}
