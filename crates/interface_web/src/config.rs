//! Web server configuration

use serde::Deserialize;

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Directory the generated PDFs live under
    pub documents_root: String,
    /// Billing timer tick interval in seconds
    pub billing_tick_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://hostel.db".to_string(),
            documents_root: "documents".to_string(),
            billing_tick_secs: 3600,
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables prefixed `HOSTEL_`
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("HOSTEL"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
