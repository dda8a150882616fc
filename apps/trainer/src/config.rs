//! Runtime configuration read from the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;
use vocab_core::algorithm::ForgottenPolicy;
use vocab_core::registry::validate_batch;

/// Intervals registered for every new user.
pub const DEFAULT_INTERVALS: &[i64] = &[1, 3, 7, 14, 30, 60];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub default_intervals: Vec<i64>,
    pub daily_reset_hour: u32,
    pub forgotten_policy: ForgottenPolicy,
    pub prune_unused_intervals: bool,
    pub log_filter: String,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let default_intervals = match lookup("DEFAULT_INTERVALS") {
            Some(raw) => parse_intervals(&raw)?,
            None => DEFAULT_INTERVALS.to_vec(),
        };

        let daily_reset_hour = match lookup("DAILY_RESET_HOUR") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|hour| *hour < 24)
                .ok_or_else(|| {
                    ConfigError::invalid("DAILY_RESET_HOUR", format!("expected 0-23, got `{raw}`"))
                })?,
            None => 0,
        };

        let forgotten_policy = match lookup("FORGOTTEN_POLICY") {
            Some(raw) => ForgottenPolicy::from_str(raw.trim()).ok_or_else(|| {
                ConfigError::invalid("FORGOTTEN_POLICY", format!("expected reset|keep, got `{raw}`"))
            })?,
            None => ForgottenPolicy::default(),
        };

        let prune_unused_intervals = match lookup("PRUNE_UNUSED_INTERVALS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::invalid("PRUNE_UNUSED_INTERVALS", format!("expected a boolean, got `{raw}`"))
            })?,
            None => false,
        };

        Ok(Self {
            database_path,
            default_intervals,
            daily_reset_hour,
            forgotten_policy,
            prune_unused_intervals,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn default_database_path() -> PathBuf {
    // Platform data dir, else the working directory
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-trainer")
        .join("vocab.db")
}

fn parse_intervals(raw: &str) -> Result<Vec<i64>, ConfigError> {
    let intervals = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|_| {
                ConfigError::invalid("DEFAULT_INTERVALS", format!("`{part}` is not an integer"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_batch(&intervals)
        .map_err(|err| ConfigError::invalid("DEFAULT_INTERVALS", err.to_string()))?;

    let unique: BTreeSet<i64> = intervals.iter().copied().collect();
    if unique.len() != intervals.len() {
        return Err(ConfigError::invalid(
            "DEFAULT_INTERVALS",
            format!("duplicate interval in `{raw}`"),
        ));
    }
    Ok(intervals)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.default_intervals, DEFAULT_INTERVALS);
        assert_eq!(config.daily_reset_hour, 0);
        assert_eq!(config.forgotten_policy, ForgottenPolicy::ResetToShortest);
        assert!(!config.prune_unused_intervals);
        assert_eq!(config.log_filter, "info");
        assert!(config.database_path.ends_with("vocab-trainer/vocab.db"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_PATH", "/tmp/vocab.db"),
            ("DEFAULT_INTERVALS", " 2, 4 ,8"),
            ("DAILY_RESET_HOUR", "4"),
            ("FORGOTTEN_POLICY", "keep"),
            ("PRUNE_UNUSED_INTERVALS", "yes"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/vocab.db"));
        assert_eq!(config.default_intervals, vec![2, 4, 8]);
        assert_eq!(config.daily_reset_hour, 4);
        assert_eq!(config.forgotten_policy, ForgottenPolicy::KeepInterval);
        assert!(config.prune_unused_intervals);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_invalid_intervals() {
        let error = config(&[("DEFAULT_INTERVALS", "1,zero")]).unwrap_err();
        assert!(error.to_string().contains("DEFAULT_INTERVALS"));
        assert!(config(&[("DEFAULT_INTERVALS", "1,0,3")]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_intervals() {
        let error = config(&[("DEFAULT_INTERVALS", "1,3,3")]).unwrap_err();
        assert!(error.to_string().contains("duplicate"));
        assert!(config(&[("DEFAULT_INTERVALS", "7, 1,7")]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_reset_hour() {
        assert!(config(&[("DAILY_RESET_HOUR", "24")]).is_err());
        assert!(config(&[("DAILY_RESET_HOUR", "-1")]).is_err());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(config(&[("FORGOTTEN_POLICY", "forget")]).is_err());
        assert!(config(&[("PRUNE_UNUSED_INTERVALS", "maybe")]).is_err());
    }
}
