//! Session handshake envelope construction.
//!
//! Pure construction, no error paths: the setup envelope carrying the model
//! identity, system instruction, and generation config, and the fixed
//! begin-interview turn that kicks off the conversation.

use super::messages::{
    ClientContent, ClientEnvelope, Content, GenerationConfig, PrebuiltVoiceConfig, Setup,
    SpeechConfig, TextPart, Turn, VoiceConfig,
};

/// Opening user turn sent right after setup.
const BEGIN_INTERVIEW_PROMPT: &str = "Please begin the interview.";

/// Build the setup envelope for a new session.
///
/// Requests audio-modality responses with the given prebuilt voice. The
/// `model` argument is the bare identifier; the `models/` prefix is added
/// here.
pub fn setup(model: &str, instruction: &str, voice: &str) -> ClientEnvelope {
    ClientEnvelope::Setup(Setup {
        model: format!("models/{model}"),
        system_instruction: Content {
            parts: vec![TextPart {
                text: instruction.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            response_modalities: vec!["AUDIO".to_string()],
            speech_config: SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: voice.to_string(),
                    },
                },
            },
        },
    })
}

/// Build the begin-interview turn with `turn_complete = true`.
pub fn begin_interview() -> ClientEnvelope {
    ClientEnvelope::ClientContent(ClientContent {
        turns: Some(vec![Turn {
            role: "user".to_string(),
            parts: vec![TextPart {
                text: BEGIN_INTERVIEW_PROMPT.to_string(),
            }],
        }]),
        turn_complete: Some(true),
        interrupt: None,
    })
}
