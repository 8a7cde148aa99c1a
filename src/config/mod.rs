//! Configuration module for the interview gateway
//!
//! Configuration is loaded from the environment (with `.env` support via
//! `dotenvy` in `main`), validated, and held in [`ServerConfig`] for the
//! lifetime of the process.
//!
//! # Example
//! ```rust,no_run
//! use interview_gateway::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::live::{DEFAULT_LIVE_MODEL, DEFAULT_LIVE_VOICE};

/// TLS configuration for HTTPS and WSS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// GEMINI_API_KEY is not set
    #[error("GEMINI_API_KEY must be set")]
    MissingApiKey,

    /// PORT could not be parsed
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    /// Only one of TLS_CERT_PATH / TLS_KEY_PATH was provided
    #[error("TLS requires both TLS_CERT_PATH and TLS_KEY_PATH")]
    IncompleteTls,
}

/// Server configuration
///
/// Contains all configuration needed to run the interview gateway:
/// - Server settings (host, port, TLS)
/// - Gemini Live credentials and session defaults (model, voice)
/// - Security settings (CORS)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    /// Gemini API key used on the Live WebSocket endpoint
    pub gemini_api_key: String,
    /// Model identifier sent in the setup envelope (without the `models/` prefix)
    pub gemini_model: String,
    /// Prebuilt voice name requested for audio responses
    pub gemini_voice: String,
    /// Endpoint override for the Live WebSocket (local testing)
    /// Default: None (public Gemini Live endpoint)
    pub gemini_endpoint: Option<String>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
}

/// Implement Drop to zeroize the API key when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.gemini_api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8000,
        };

        let tls = match (env::var("TLS_CERT_PATH"), env::var("TLS_KEY_PATH")) {
            (Ok(cert), Ok(key)) => Some(TlsConfig {
                cert_path: PathBuf::from(cert),
                key_path: PathBuf::from(key),
            }),
            (Err(_), Err(_)) => None,
            _ => return Err(ConfigError::IncompleteTls),
        };

        let config = Self {
            host,
            port,
            tls,
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_LIVE_MODEL.to_string()),
            gemini_voice: env::var("GEMINI_VOICE")
                .unwrap_or_else(|_| DEFAULT_LIVE_VOICE.to_string()),
            gemini_endpoint: env::var("GEMINI_ENDPOINT").ok(),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini_api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    /// The socket address string the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether TLS is configured.
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }
}
