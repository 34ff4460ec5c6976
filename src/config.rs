//! Configuration module for inbound framing
//!
//! Configuration arrives as JSON bytes from whatever owns the connection.
//! Every field has a default, so `{}` is a valid configuration.

use serde::Deserialize;
use thiserror::Error;

/// Per-connection framing configuration
#[derive(Clone, Debug, Deserialize)]
pub struct FramerConfig {
    /// Longest control line accepted while waiting for its CRLF
    #[serde(default = "default_max_control_line")]
    pub max_control_line: usize,

    /// Initial capacity of the chunk queue
    #[serde(default = "default_chunk_queue_capacity")]
    pub chunk_queue_capacity: usize,

    /// Whether to emit structured framing events
    #[serde(default = "default_log_events")]
    pub log_events: bool,
}

fn default_max_control_line() -> usize {
    4096 // NATS client default
}

fn default_chunk_queue_capacity() -> usize {
    16
}

fn default_log_events() -> bool {
    false
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            max_control_line: default_max_control_line(),
            chunk_queue_capacity: default_chunk_queue_capacity(),
            log_events: default_log_events(),
        }
    }
}

impl FramerConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str =
            std::str::from_utf8(bytes).map_err(|e| ConfigError::InvalidUtf8(e.to_string()))?;

        let config: Self = serde_json::from_str(config_str)
            .map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

        if config.max_control_line == 0 {
            return Err(ConfigError::InvalidValue("max_control_line must be > 0"));
        }
        Ok(config)
    }
}

/// Configuration parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FramerConfig::default();
        assert_eq!(config.max_control_line, 4096);
        assert!(config.chunk_queue_capacity > 0);
        assert!(!config.log_events);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{"max_control_line": 1024, "log_events": true}"#;
        let config = FramerConfig::from_bytes(json.as_bytes()).unwrap();
        assert_eq!(config.max_control_line, 1024);
        assert_eq!(config.chunk_queue_capacity, 16);
        assert!(config.log_events);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = FramerConfig::from_bytes(b"{}").unwrap();
        assert_eq!(config.max_control_line, 4096);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            FramerConfig::from_bytes(&[0xff, 0xfe]),
            Err(ConfigError::InvalidUtf8(_))
        ));
        assert!(matches!(
            FramerConfig::from_bytes(b"{not json"),
            Err(ConfigError::InvalidJson(_))
        ));
        assert_eq!(
            FramerConfig::from_bytes(br#"{"max_control_line": 0}"#).unwrap_err(),
            ConfigError::InvalidValue("max_control_line must be > 0")
        );
    }
}
