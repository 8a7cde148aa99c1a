//! Gemini Live WebSocket message types.
//!
//! All messages are JSON-encoded text frames. Outbound envelopes use
//! snake_case field names; inbound server events use camelCase.
//!
//! # Protocol Overview
//!
//! Client envelopes (sent to the Live endpoint):
//! - `setup` - model identity, system instruction, generation config
//! - `client_content` - structured turns or an interrupt flag
//! - `realtime_input` - base64 media chunks
//!
//! Server events (received from the Live endpoint):
//! - `serverContent.modelTurn.parts[]` - inline audio data and/or text
//! - `serverContent.inputTranscription` - transcription of user audio

use serde::{Deserialize, Serialize};

/// MIME type for raw PCM media chunks.
pub const AUDIO_PCM_MIME: &str = "audio/pcm";

// =============================================================================
// Client Envelopes (gateway -> Live endpoint)
// =============================================================================

/// Outbound wire message to the Live endpoint.
///
/// External serde tagging yields the wire forms `{"setup":…}`,
/// `{"client_content":…}` and `{"realtime_input":…}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientEnvelope {
    /// Session setup; must be the first envelope on the connection
    Setup(Setup),
    /// Structured turn content or an interrupt
    ClientContent(ClientContent),
    /// Realtime media input
    RealtimeInput(RealtimeInput),
}

impl ClientEnvelope {
    /// Wrap one opaque base64 audio chunk as realtime input.
    pub fn realtime_audio(data: String) -> Self {
        ClientEnvelope::RealtimeInput(RealtimeInput {
            media_chunks: vec![MediaChunk {
                data,
                mime_type: AUDIO_PCM_MIME.to_string(),
            }],
        })
    }

    /// Interrupt the current model turn.
    pub fn interrupt() -> Self {
        ClientEnvelope::ClientContent(ClientContent {
            turns: None,
            turn_complete: None,
            interrupt: Some(true),
        })
    }
}

/// Session setup payload.
#[derive(Debug, Clone, Serialize)]
pub struct Setup {
    /// Fully qualified model identity (`models/{model}`)
    pub model: String,
    /// System instruction content
    pub system_instruction: Content,
    /// Generation configuration
    pub generation_config: GenerationConfig,
}

/// Text content made of ordered parts.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<TextPart>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize)]
pub struct TextPart {
    pub text: String,
}

/// Generation configuration requesting audio responses.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub speech_config: SpeechConfig,
}

/// Speech output configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

/// Voice selection.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Prebuilt voice selection.
#[derive(Debug, Clone, Serialize)]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

/// Turn content or interrupt flag.
#[derive(Debug, Clone, Serialize)]
pub struct ClientContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turns: Option<Vec<Turn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupt: Option<bool>,
}

/// One conversational turn.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub role: String,
    pub parts: Vec<TextPart>,
}

/// Realtime media input.
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeInput {
    pub media_chunks: Vec<MediaChunk>,
}

/// One opaque media chunk.
#[derive(Debug, Clone, Serialize)]
pub struct MediaChunk {
    pub data: String,
    pub mime_type: String,
}

// =============================================================================
// Server Events (Live endpoint -> gateway)
// =============================================================================

/// Inbound message from the Live endpoint.
///
/// Purely event-driven: every field is optional and unknown fields are
/// ignored, so unrecognized server-content shapes deserialize to an empty
/// event rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerEvent {
    #[serde(default)]
    pub server_content: Option<ServerContent>,
}

/// Model output and transcription payloads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerContent {
    pub model_turn: Option<ModelTurn>,
    pub input_transcription: Option<InputTranscription>,
}

/// Ordered sequence of model output parts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelTurn {
    pub parts: Vec<ServerPart>,
}

/// One model output part; may carry inline audio, text, or both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerPart {
    pub inline_data: Option<InlineData>,
    pub text: Option<String>,
}

/// Inline base64 audio data.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineData {
    pub data: String,
}

/// Transcription of user input audio.
#[derive(Debug, Clone, Deserialize)]
pub struct InputTranscription {
    pub text: String,
}
