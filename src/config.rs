//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, applies the
//! `PORT` environment override, and defines defaults for the listener,
//! connection timeouts and logging. `AppConfig` is the root configuration struct.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// HTTP Listener Defaults
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port when neither `PORT` nor the config file set one
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Environment variable that overrides the listen port
pub const PORT_ENV_VAR: &str = "PORT";

// =============================================================================
// Connection Timeouts
// =============================================================================
// Bound the resources a slow client can hold. All values are in seconds.

/// Time allowed for a client to send the complete request head
pub const DEFAULT_HEADER_READ_TIMEOUT_SECS: u64 = 10;

/// Time allowed for reading the request body
pub const DEFAULT_BODY_READ_TIMEOUT_SECS: u64 = 30;

/// Time allowed for producing and writing the response
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 30;

/// Time in-flight connections get to finish after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "mjolnir=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_header_read_timeout")]
    pub header_read_timeout_seconds: u64,
    #[serde(default = "HttpServerConfig::default_body_read_timeout")]
    pub body_read_timeout_seconds: u64,
    #[serde(default = "HttpServerConfig::default_write_timeout")]
    pub write_timeout_seconds: u64,
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            header_read_timeout_seconds: Self::default_header_read_timeout(),
            body_read_timeout_seconds: Self::default_body_read_timeout(),
            write_timeout_seconds: Self::default_write_timeout(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }
    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
    fn default_header_read_timeout() -> u64 {
        DEFAULT_HEADER_READ_TIMEOUT_SECS
    }
    fn default_body_read_timeout() -> u64 {
        DEFAULT_BODY_READ_TIMEOUT_SECS
    }
    fn default_write_timeout() -> u64 {
        DEFAULT_WRITE_TIMEOUT_SECS
    }
    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    pub fn header_read_timeout(&self) -> Duration {
        Duration::from_secs(self.header_read_timeout_seconds)
    }

    pub fn body_read_timeout(&self) -> Duration {
        Duration::from_secs(self.body_read_timeout_seconds)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_seconds)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "json" (structured, default) or "text" (human-readable)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether log lines should be emitted as JSON objects
    pub fn is_json(&self) -> bool {
        !self.format.eq_ignore_ascii_case("text")
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// the `PORT` environment override.
    pub fn resolve<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        Ok(config)
    }

    /// Apply a `PORT` value. Absent or empty leaves the configured port untouched.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        self.http.port = raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let format = self.logging.format.to_ascii_lowercase();
        if format != "json" && format != "text" {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"json\" or \"text\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.header_read_timeout(), Duration::from_secs(10));
        assert_eq!(config.http.body_read_timeout(), Duration::from_secs(30));
        assert_eq!(config.http.write_timeout(), Duration::from_secs(30));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config("[http]\nport = 9000\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.write_timeout_seconds, 30);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
[http]
host = "127.0.0.1"
port = 3000
header_read_timeout_seconds = 5
body_read_timeout_seconds = 15
write_timeout_seconds = 20
shutdown_grace_seconds = 1

[logging]
format = "text"
"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.header_read_timeout(), Duration::from_secs(5));
        assert_eq!(config.http.body_read_timeout(), Duration::from_secs(15));
        assert_eq!(config.http.write_timeout(), Duration::from_secs(20));
        assert_eq!(config.http.shutdown_grace(), Duration::from_secs(1));
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_shipped_sample_config_matches_defaults() {
        let config =
            AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/mjolnir.toml")).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.http.host, defaults.http.host);
        assert_eq!(config.http.port, defaults.http.port);
        assert_eq!(config.http.write_timeout(), defaults.http.write_timeout());
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_load_rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let file = write_config("[http\nport = ");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/mjolnir.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("9090")).unwrap();
        assert_eq!(config.http.port, 9090);
    }

    #[test]
    fn test_port_override_absent_or_empty() {
        let mut config = AppConfig::default();
        config.apply_port_override(None).unwrap();
        assert_eq!(config.http.port, 8080);
        config.apply_port_override(Some("")).unwrap();
        assert_eq!(config.http.port, 8080);
        config.apply_port_override(Some("  ")).unwrap();
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_port_override_invalid() {
        let mut config = AppConfig::default();
        let err = config.apply_port_override(Some("http")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
        assert_eq!(err.to_string(), "Invalid PORT value: \"http\"");
        assert!(config.apply_port_override(Some("70000")).is_err());
    }
}
