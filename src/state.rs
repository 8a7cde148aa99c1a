//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::live::LiveConfig;

/// Application state shared across handlers.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state from validated configuration.
    pub fn new(config: ServerConfig) -> Arc<Self> {
        Arc::new(Self { config })
    }

    /// Build the Gemini Live connection settings for a new session.
    pub fn live_config(&self) -> LiveConfig {
        let mut live = LiveConfig::new(
            self.config.gemini_api_key.clone(),
            self.config.gemini_model.clone(),
            self.config.gemini_voice.clone(),
        );
        live.endpoint = self.config.gemini_endpoint.clone();
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::live::{DEFAULT_LIVE_MODEL, DEFAULT_LIVE_VOICE};

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            tls: None,
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_LIVE_MODEL.to_string(),
            gemini_voice: DEFAULT_LIVE_VOICE.to_string(),
            gemini_endpoint: Some("ws://127.0.0.1:9000".to_string()),
            cors_allowed_origins: None,
        }
    }

    #[test]
    fn test_live_config_from_server_config() {
        let state = AppState::new(test_config());
        let live = state.live_config();
        assert_eq!(live.api_key, "test-key");
        assert_eq!(live.model, DEFAULT_LIVE_MODEL);
        assert_eq!(live.voice, DEFAULT_LIVE_VOICE);
        assert_eq!(live.endpoint.as_deref(), Some("ws://127.0.0.1:9000"));
    }
}
