//! Interview WebSocket message types
//!
//! Messages on the browser-facing socket are JSON text frames. Inbound
//! messages are tagged by field presence (`audio` or `control`); outbound
//! messages carry an explicit `type` tag.

use serde::{Deserialize, Serialize};

// =============================================================================
// Incoming Messages (client -> gateway)
// =============================================================================

/// First message of every session, carrying the interview context.
///
/// Missing fields default to empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInit {
    /// Job description text
    #[serde(default)]
    pub jd: String,
    /// Candidate resume text
    #[serde(default)]
    pub cr: String,
}

/// Incoming WebSocket messages from the client after session init.
///
/// Untagged: the variant is picked by which field is present. Valid JSON
/// matching neither variant is silently dropped by the relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClientMessage {
    /// One opaque base64 audio chunk
    Audio {
        /// Base64-encoded PCM payload, forwarded unchanged
        audio: String,
    },
    /// A control command
    Control {
        /// The command; only `interrupt` exists today
        control: ControlCommand,
    },
}

/// Control commands the client may send mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlCommand {
    /// Interrupt the current model turn
    Interrupt,
}

// =============================================================================
// Outgoing Messages (gateway -> client)
// =============================================================================

/// Outgoing WebSocket messages to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// One opaque base64 audio chunk of model speech
    Audio {
        /// Base64-encoded PCM payload, forwarded unchanged
        data: String,
    },
    /// A transcript fragment
    Transcript {
        /// Who is speaking
        role: TranscriptRole,
        /// Transcribed text
        text: String,
    },
}

/// Role of the speaker in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    /// Model speech transcript
    Model,
    /// User speech transcript
    User,
}
