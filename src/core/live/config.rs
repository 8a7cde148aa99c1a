//! Gemini Live endpoint configuration.

use url::Url;

/// Host of the Gemini Live WebSocket endpoint.
pub const GEMINI_LIVE_HOST: &str = "generativelanguage.googleapis.com";

/// Path of the bidirectional generate-content service.
pub const GEMINI_LIVE_PATH: &str =
    "/ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent";

/// Default model for interview sessions.
pub const DEFAULT_LIVE_MODEL: &str = "gemini-2.0-flash-exp";

/// Default prebuilt voice for audio responses.
pub const DEFAULT_LIVE_VOICE: &str = "Puck";

/// Sample rate of audio sent to the Live endpoint (descriptive only; the
/// relay forwards payloads opaquely).
pub const LIVE_SEND_SAMPLE_RATE: u32 = 16_000;

/// Sample rate of audio received from the Live endpoint (descriptive only).
pub const LIVE_RECEIVE_SAMPLE_RATE: u32 = 24_000;

/// Channel count for Live audio in both directions (descriptive only).
pub const LIVE_AUDIO_CHANNELS: u16 = 1;

/// Connection settings for one Live session.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// API key appended as the `key` query parameter
    pub api_key: String,
    /// Model identifier without the `models/` prefix
    pub model: String,
    /// Prebuilt voice name for audio responses
    pub voice: String,
    /// Endpoint override (`ws://` or `wss://` base URL) for local testing
    pub endpoint: Option<String>,
}

impl LiveConfig {
    /// Create connection settings for the public Live endpoint.
    pub fn new(api_key: String, model: String, voice: String) -> Self {
        Self {
            api_key,
            model,
            voice,
            endpoint: None,
        }
    }

    /// Build the WebSocket URL with the API key query parameter.
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        let base = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("wss://{GEMINI_LIVE_HOST}{GEMINI_LIVE_PATH}"),
        };
        let mut url = Url::parse(&base)?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}
