//! Bot configuration
//!
//! Credentials and polling settings, read once at startup from the
//! environment (after an optional `.env` file has been loaded).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_LOG_FILE: &str = "log.txt";

const PRACTICUM_TOKEN_VAR: &str = "YAP_TOKEN";
const TELEGRAM_TOKEN_VAR: &str = "TG_TOKEN";
const TELEGRAM_CHAT_ID_VAR: &str = "TEL_ID";

/// Configuration errors that prevent the bot from starting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat id or `@channel` username
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Pause between poll cycles
    pub poll_interval: Duration,

    /// Timeout for each outbound HTTP request
    pub request_timeout: Duration,

    /// Move the cursor to the `current_date` of each response
    pub advance_cursor: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            advance_cursor: false,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - YAP_TOKEN (required)
    /// - TG_TOKEN (required)
    /// - TEL_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - ADVANCE_CURSOR (optional, default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup
    ///
    /// Empty values count as missing. Every missing required key is reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str, missing: &mut Vec<&'static str>| {
            let value = lookup(key).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let mut missing = Vec::new();
        let practicum_token = required(PRACTICUM_TOKEN_VAR, &mut missing);
        let telegram_token = required(TELEGRAM_TOKEN_VAR, &mut missing);
        let telegram_chat_id = required(TELEGRAM_CHAT_ID_VAR, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT").filter(|v| !v.is_empty()) {
            config.endpoint = endpoint;
        }

        if let Some(interval) = lookup("RETRY_PERIOD").and_then(|s| s.trim().parse::<u64>().ok()) {
            config.poll_interval = Duration::from_secs(interval);
        }

        if let Some(timeout) = lookup("REQUEST_TIMEOUT").and_then(|s| s.trim().parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(timeout);
        }

        config.advance_cursor = lookup("ADVANCE_CURSOR")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("advance_cursor", &self.advance_cursor)
            .finish()
    }
}

/// Log file path from `LOG_FILE`, read before the rest of the configuration
pub fn log_file_path() -> PathBuf {
    std::env::var("LOG_FILE")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("YAP_TOKEN", "api-token"),
        ("TG_TOKEN", "bot-token"),
        ("TEL_ID", "123456"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&CREDENTIALS)).unwrap();
        assert_eq!(config.practicum_token, "api-token");
        assert_eq!(config.telegram_token, "bot-token");
        assert_eq!(config.telegram_chat_id, "123456");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.advance_cursor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.extend([
            ("RETRY_PERIOD", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("ADVANCE_CURSOR", "True"),
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
        ]);

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.advance_cursor);
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
    }

    #[test]
    fn test_unparsable_interval_falls_back_to_default() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("RETRY_PERIOD", "ten minutes"));

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }

    #[test]
    fn test_reports_every_missing_variable() {
        let err = Config::from_lookup(lookup_from(&[("TG_TOKEN", "bot-token")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec!["YAP_TOKEN", "TEL_ID"])
        );
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: YAP_TOKEN, TEL_ID"
        );
    }

    #[test]
    fn test_empty_value_is_missing() {
        let pairs = [("YAP_TOKEN", ""), ("TG_TOKEN", "bot-token"), ("TEL_ID", "1")];
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["YAP_TOKEN"]));
    }

    #[test]
    fn test_validation() {
        let mut config = Config::new("a", "b", "c");
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(600);

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = Config::new("api-secret", "bot-secret", "42");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("api-secret"));
        assert!(!debug.contains("bot-secret"));
        assert!(debug.contains("42"));
    }
}
