//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream Credentials ===
    /// OpenWeather API key.
    pub openweather_key: String,

    /// OpenAI API key.
    pub openai_api_key: String,

    // === Upstream Endpoints ===
    /// OpenWeather API base URL.
    #[serde(default = "default_openweather_url")]
    pub openweather_url: String,

    /// OpenAI API base URL.
    #[serde(default = "default_openai_url")]
    pub openai_url: String,

    /// Chat completion model name.
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    // === HTTP Client ===
    /// Total timeout for outbound upstream requests, in milliseconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_ms: u64,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Metrics ===
    /// Enable the Prometheus metrics exporter.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Port for the Prometheus metrics exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_openweather_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_openai_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_http_timeout() -> u64 {
    10_000
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_metrics_port() -> u16 {
    9090
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    ///
    /// Fails when a required credential variable is absent, so the process
    /// refuses to start without them.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.openweather_key.is_empty() {
            return Err("OPENWEATHER_KEY must not be empty".to_string());
        }

        if self.openai_api_key.is_empty() {
            return Err("OPENAI_API_KEY must not be empty".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }
}
