//! Configuration settings
//!
//! Settings are loaded from a TOML file, overridden by environment variables
//! and finally by command-line flags.

use serde::{Deserialize, Serialize};

use crate::{contact::ContactConfig, youtube::YouTubeConfig};

/// Default YouTube Data API v3 root
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default form relay endpoint
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

// Helper functions for serde defaults
fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "::".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_base_url() -> String {
    DEFAULT_YOUTUBE_BASE_URL.to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_user_agent() -> String {
    crate::utils::version::user_agent()
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP API configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Video platform configuration
    #[serde(default)]
    pub youtube: YouTubeSettings,
    /// Contact form relay configuration
    #[serde(default)]
    pub contact: ContactSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Network and proxy configuration
    #[serde(default)]
    pub network: NetworkSettings,
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

/// YouTube Data API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct YouTubeSettings {
    /// API key; required by every discovery call
    #[serde(default)]
    pub api_key: Option<String>,
    /// API root, overridable for testing
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// ISO 3166-1 alpha-2 region searches are restricted to
    #[serde(default = "default_region")]
    pub region: String,
}

/// Contact form relay configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Relay endpoint receiving form submissions
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    /// Fixed access key attached to every submission
    #[serde(default)]
    pub access_key: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Network and proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// HTTPS proxy URL
    #[serde(default)]
    pub https_proxy: Option<String>,
    /// HTTP proxy URL
    #[serde(default)]
    pub http_proxy: Option<String>,
    /// All protocols proxy URL
    #[serde(default)]
    pub all_proxy: Option<String>,
    /// Connection timeout in seconds; unset waits indefinitely
    #[serde(default)]
    pub connect_timeout: Option<u64>,
    /// Whole-request timeout in seconds; unset waits indefinitely
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_true(),
        }
    }
}

impl Default for YouTubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            region: default_region(),
        }
    }
}

// Keys never reach debug logs.
impl std::fmt::Debug for YouTubeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("region", &self.region)
            .finish()
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            access_key: None,
        }
    }
}

impl std::fmt::Debug for ContactSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSettings")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
            format: default_log_format(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
            connect_timeout: None,
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> crate::Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| crate::Error::config(name, &format!("Invalid value '{}': {}", value, e)))
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        if let Ok(host) = std::env::var("ARENA_SERVER_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("ARENA_SERVER_PORT") {
            settings.server.port = parse_env("ARENA_SERVER_PORT", &port)?;
        }

        settings.youtube.api_key = std::env::var("YOUTUBE_API_KEY").ok();

        if let Ok(base_url) = std::env::var("YOUTUBE_BASE_URL") {
            settings.youtube.base_url = base_url;
        }

        if let Ok(region) = std::env::var("YOUTUBE_REGION") {
            settings.youtube.region = region;
        }

        settings.contact.access_key = std::env::var("CONTACT_ACCESS_KEY").ok();

        settings.network.https_proxy = std::env::var("HTTPS_PROXY").ok();
        settings.network.http_proxy = std::env::var("HTTP_PROXY").ok();
        settings.network.all_proxy = std::env::var("ALL_PROXY").ok();

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;
        let defaults = Self::default();

        // Only values that differ from the defaults came from the environment
        if env_settings.server.host != defaults.server.host {
            self.server.host = env_settings.server.host;
        }

        if env_settings.server.port != defaults.server.port {
            self.server.port = env_settings.server.port;
        }

        if env_settings.youtube.base_url != defaults.youtube.base_url {
            self.youtube.base_url = env_settings.youtube.base_url;
        }

        if env_settings.youtube.region != defaults.youtube.region {
            self.youtube.region = env_settings.youtube.region;
        }

        if env_settings.logging.level != defaults.logging.level {
            self.logging.level = env_settings.logging.level;
        }

        // Secrets and proxies always override if present
        if env_settings.youtube.api_key.is_some() {
            self.youtube.api_key = env_settings.youtube.api_key;
        }
        if env_settings.contact.access_key.is_some() {
            self.contact.access_key = env_settings.contact.access_key;
        }
        if env_settings.network.https_proxy.is_some() {
            self.network.https_proxy = env_settings.network.https_proxy;
        }
        if env_settings.network.http_proxy.is_some() {
            self.network.http_proxy = env_settings.network.http_proxy;
        }
        if env_settings.network.all_proxy.is_some() {
            self.network.all_proxy = env_settings.network.all_proxy;
        }

        Ok(self)
    }

    /// Get effective proxy URL based on priority
    pub fn get_proxy_url(&self) -> Option<String> {
        self.network.proxy_url()
    }

    /// Build the discovery client configuration
    pub fn youtube_config(&self) -> crate::Result<YouTubeConfig> {
        let api_key = self
            .youtube
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                crate::Error::config(
                    "youtube.api_key",
                    "No API key configured (set YOUTUBE_API_KEY or [youtube] api_key)",
                )
            })?;

        Ok(YouTubeConfig::new(
            api_key,
            self.youtube.base_url.clone(),
            self.youtube.region.clone(),
        ))
    }

    /// Build the contact relay configuration
    pub fn contact_config(&self) -> crate::Result<ContactConfig> {
        let access_key = self
            .contact
            .access_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                crate::Error::config(
                    "contact.access_key",
                    "No access key configured (set CONTACT_ACCESS_KEY or [contact] access_key)",
                )
            })?;

        Ok(ContactConfig::new(self.contact.endpoint.clone(), access_key))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::config(
                "port",
                "Invalid server port: cannot be 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_format",
                    &format!("Invalid log format: {}", self.logging.format),
                ));
            }
        }

        let region = &self.youtube.region;
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(crate::Error::config(
                "youtube.region",
                &format!("Invalid region code '{}': expected two letters", region),
            ));
        }

        for (name, value) in [
            ("youtube.base_url", &self.youtube.base_url),
            ("contact.endpoint", &self.contact.endpoint),
        ] {
            if let Err(e) = url::Url::parse(value) {
                return Err(crate::Error::config(
                    name,
                    &format!("Invalid URL '{}': {}", value, e),
                ));
            }
        }

        for (name, proxy_url) in [
            ("https_proxy", &self.network.https_proxy),
            ("http_proxy", &self.network.http_proxy),
            ("all_proxy", &self.network.all_proxy),
        ]
        .iter()
        {
            if let Some(url_str) = proxy_url
                && let Err(e) = url::Url::parse(url_str)
            {
                return Err(crate::Error::config(
                    *name,
                    &format!("Invalid proxy URL '{}': {}", url_str, e),
                ));
            }
        }

        Ok(())
    }
}

impl NetworkSettings {
    /// Effective proxy URL: HTTPS, then HTTP, then ALL
    pub fn proxy_url(&self) -> Option<String> {
        self.https_proxy
            .as_ref()
            .or(self.http_proxy.as_ref())
            .or(self.all_proxy.as_ref())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::config::ENV_TEST_MUTEX;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "::");
        assert_eq!(settings.server.port, 8787);
        assert_eq!(settings.youtube.base_url, DEFAULT_YOUTUBE_BASE_URL);
        assert_eq!(settings.youtube.region, "US");
        assert!(settings.youtube.api_key.is_none());
        assert_eq!(settings.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert!(settings.network.request_timeout.is_none());
        assert!(settings.network.connect_timeout.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "localhost"
port = 8080

[youtube]
api_key = "file-key"
region = "GB"

[network]
request_timeout = 15
        "#
        )
        .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.server.host, "localhost");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.youtube.api_key.as_deref(), Some("file-key"));
        assert_eq!(settings.youtube.region, "GB");
        assert_eq!(settings.youtube.base_url, DEFAULT_YOUTUBE_BASE_URL);
        assert_eq!(settings.network.request_timeout, Some(15));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[server\nport = ").unwrap();

        let err = Settings::from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_env_var_override() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::set_var("ARENA_SERVER_PORT", "9000");
            std::env::set_var("YOUTUBE_REGION", "DE");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.youtube.region, "DE");

        unsafe {
            std::env::remove_var("ARENA_SERVER_PORT");
            std::env::remove_var("YOUTUBE_REGION");
        }
    }

    #[test]
    fn test_env_invalid_port() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::set_var("ARENA_SERVER_PORT", "not-a-port");
        }

        let result = Settings::from_env();

        unsafe {
            std::env::remove_var("ARENA_SERVER_PORT");
        }

        assert!(matches!(result, Err(crate::Error::Config { .. })));
    }

    #[test]
    fn test_proxy_priority() {
        let mut settings = Settings::default();
        settings.network.https_proxy = Some("https://proxy1:8080".to_string());
        settings.network.http_proxy = Some("http://proxy2:8080".to_string());
        settings.network.all_proxy = Some("socks5://proxy3:1080".to_string());

        assert_eq!(settings.get_proxy_url().unwrap(), "https://proxy1:8080");

        settings.network.https_proxy = None;
        assert_eq!(settings.get_proxy_url().unwrap(), "http://proxy2:8080");

        settings.network.http_proxy = None;
        assert_eq!(settings.get_proxy_url().unwrap(), "socks5://proxy3:1080");
    }

    #[test]
    fn test_youtube_config_requires_key() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.youtube_config(),
            Err(crate::Error::Config { .. })
        ));

        settings.youtube.api_key = Some("   ".to_string());
        assert!(settings.youtube_config().is_err());

        settings.youtube.api_key = Some("abc".to_string());
        let config = settings.youtube_config().unwrap();
        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.region(), "US");
    }

    #[test]
    fn test_contact_config_requires_key() {
        let mut settings = Settings::default();
        assert!(settings.contact_config().is_err());

        settings.contact.access_key = Some("relay-key".to_string());
        assert!(settings.contact_config().is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("super-secret".to_string());
        settings.contact.access_key = Some("also-secret".to_string());

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("also-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_validation_success() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_port() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_region() {
        let mut settings = Settings::default();
        settings.youtube.region = "USA".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let mut settings = Settings::default();
        settings.youtube.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_proxy_url() {
        let mut settings = Settings::default();
        settings.network.https_proxy = Some("invalid-url".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let mut settings = Settings::default();
        settings.logging.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }
}
