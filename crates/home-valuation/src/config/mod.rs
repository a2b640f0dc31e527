use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::intake::ADVERTISED_LIMIT_MB;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the intake service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("VALUATION_ENV", "development"));

        let host = var_or("VALUATION_HOST", "127.0.0.1");
        let port = var_or("VALUATION_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("VALUATION_LOG_LEVEL", "info");
        let ansi = environment == AppEnvironment::Development;

        let upload_limit_mb = match env::var("VALUATION_UPLOAD_LIMIT_MB") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidUploadLimit(raw))?,
            Err(_) => ADVERTISED_LIMIT_MB,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            intake: IntakeConfig { upload_limit_mb },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Presentation settings for the intake form.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Shown beside the drop zone only; uploads are never size-checked.
    pub upload_limit_mb: u32,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            upload_limit_mb: ADVERTISED_LIMIT_MB,
        }
    }
}

impl IntakeConfig {
    pub fn upload_hint(&self) -> String {
        format!("Up to {}MB", self.upload_limit_mb)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("VALUATION_PORT must be a valid u16")]
    InvalidPort,
    #[error("VALUATION_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("VALUATION_UPLOAD_LIMIT_MB must be a whole number of megabytes, got '{0}'")]
    InvalidUploadLimit(String),
}
