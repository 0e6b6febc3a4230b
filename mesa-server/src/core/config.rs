use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | Port serving REST and SOAP |
/// | ENVIRONMENT | development | Runtime environment |
/// | CATALOG_PATH | (built-in) | JSON table catalog |
/// | SOAP_ENDPOINT_URL | http://127.0.0.1:{HTTP_PORT}/wsdl | Integration target |
/// | INTEGRATION_TIMEOUT_MS | 5000 | Per-attempt timeout |
/// | INTEGRATION_MAX_ATTEMPTS | 3 | Attempt bound (at least 1) |
/// | INTEGRATION_RETRY_BACKOFF_MS | 100 | Delay between attempts |
/// | LOG_LEVEL | info | Log filter when RUST_LOG is unset |
/// | LOG_DIR | (stdout) | Daily-rolling log file directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 CATALOG_PATH=./catalog.json cargo run -p mesa-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// Table catalog file; the built-in catalog when `None`
    pub catalog_path: Option<String>,
    /// Explicit SOAP endpoint for the integration pathway
    pub soap_endpoint_url: Option<String>,
    pub integration_timeout_ms: u64,
    pub integration_max_attempts: u32,
    pub integration_retry_backoff_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT").unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            catalog_path: env_non_empty("CATALOG_PATH"),
            soap_endpoint_url: env_non_empty("SOAP_ENDPOINT_URL"),
            integration_timeout_ms: env_parse("INTEGRATION_TIMEOUT_MS").unwrap_or(5000),
            integration_max_attempts: env_parse::<u32>("INTEGRATION_MAX_ATTEMPTS")
                .unwrap_or(3)
                .max(1),
            integration_retry_backoff_ms: env_parse("INTEGRATION_RETRY_BACKOFF_MS").unwrap_or(100),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: env_non_empty("LOG_DIR"),
        }
    }

    /// Override the listener port and SOAP endpoint
    ///
    /// Used by tests that bind an ephemeral port first.
    pub fn with_overrides(http_port: u16, soap_endpoint_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.soap_endpoint_url = Some(soap_endpoint_url.into());
        config
    }

    /// Where the integration pathway sends its SOAP calls
    pub fn soap_endpoint(&self) -> String {
        self.soap_endpoint_url
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}/wsdl", self.http_port))
    }

    pub fn integration_timeout(&self) -> Duration {
        Duration::from_millis(self.integration_timeout_ms)
    }

    pub fn integration_backoff(&self) -> Duration {
        Duration::from_millis(self.integration_retry_backoff_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
