use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::feed::pool::{DEFAULT_PARTICIPANTS, DEFAULT_PHRASES};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

/// Upper bound for every millisecond setting (one day).
pub const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name used for messages sent from the composer.
    pub username: String,
    /// Participants shown as online; also the sender pool for the feed.
    pub participants: Vec<String>,
    pub phrases: Vec<String>,
    pub tick_interval_ms: u64,
    /// Chance per tick that the feed injects a message.
    pub injection_probability: f64,
    pub notification_ttl_ms: u64,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: "You".to_string(),
            participants: DEFAULT_PARTICIPANTS.iter().map(|s| s.to_string()).collect(),
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            tick_interval_ms: 8000,
            injection_probability: 0.3,
            notification_ttl_ms: 4000,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.min(MAX_DURATION_MS))
    }

    pub fn notification_ttl(&self) -> chrono::Duration {
        i64::try_from(self.notification_ttl_ms.min(MAX_DURATION_MS))
            .ok()
            .and_then(chrono::Duration::try_milliseconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::Invalid("username must not be blank".into()));
        }
        if self.participants.is_empty() {
            return Err(ConfigError::Invalid("participant pool is empty".into()));
        }
        if self.phrases.is_empty() {
            return Err(ConfigError::Invalid("phrase pool is empty".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if self.tick_interval_ms > MAX_DURATION_MS {
            return Err(ConfigError::Invalid(format!(
                "tick_interval_ms {} exceeds {MAX_DURATION_MS}",
                self.tick_interval_ms
            )));
        }
        if self.notification_ttl_ms > MAX_DURATION_MS {
            return Err(ConfigError::Invalid(format!(
                "notification_ttl_ms {} exceeds {MAX_DURATION_MS}",
                self.notification_ttl_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.injection_probability) {
            return Err(ConfigError::Invalid(format!(
                "injection_probability {} is outside [0, 1]",
                self.injection_probability
            )));
        }
        Ok(())
    }
}

pub fn try_load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str::<AppConfig>(&content)?;
    config.validate()?;
    Ok(config)
}

/// Loads the config at `path`, falling back to defaults on any error.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match try_load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Read(err)) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("Ignoring config file {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.participants.len(), 4);
        assert_eq!(config.phrases.len(), 8);
        assert_eq!(config.tick_interval(), Duration::from_secs(8));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file = write_config(r#"{ "username": "Zed", "seed": 7 }"#);
        let config = try_load_config(file.path()).unwrap();
        assert_eq!(config.username, "Zed");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.injection_probability, 0.3);
        assert_eq!(config.participants, AppConfig::default().participants);
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let file = write_config(r#"{ "phrases": [] }"#);
        let err = try_load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        let file = write_config(r#"{ "injection_probability": 1.5 }"#);
        let err = try_load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_oversized_durations_are_rejected() {
        for content in [
            r#"{ "notification_ttl_ms": 9223372036854775808 }"#,
            r#"{ "notification_ttl_ms": 86400001 }"#,
            r#"{ "tick_interval_ms": 18446744073709551615 }"#,
        ] {
            let file = write_config(content);
            let err = try_load_config(file.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{content}");
        }
    }

    #[test]
    fn test_notification_ttl_never_panics() {
        let config = AppConfig {
            notification_ttl_ms: u64::MAX,
            ..AppConfig::default()
        };
        assert_eq!(
            config.notification_ttl(),
            chrono::Duration::milliseconds(MAX_DURATION_MS as i64)
        );
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let file = write_config("{ not json");
        assert!(matches!(
            try_load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
        let config = load_config(file.path().to_str().unwrap());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let config = load_config(path.to_str().unwrap());
        assert_eq!(config, AppConfig::default());
    }
}
