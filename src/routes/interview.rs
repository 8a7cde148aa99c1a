//! Interview WebSocket route configuration
//!
//! This module configures the WebSocket endpoint for real-time voice
//! interviews backed by the Gemini Live API.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::interview::interview_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the interview WebSocket router
///
/// # Endpoint
///
/// `GET /interview` - WebSocket upgrade for a voice interview session
///
/// # Protocol
///
/// After WebSocket upgrade, clients send:
/// 1. An init message with the job description and candidate resume
/// 2. Base64 audio chunks (PCM 16-bit, 16kHz, mono) and control messages
///
/// Server responds with:
/// - `audio` messages carrying base64 model speech (PCM 16-bit, 24kHz, mono)
/// - `transcript` messages for both model and user speech
///
/// # Example
///
/// ```json
/// // Client sends init
/// {"jd": "Senior backend engineer...", "cr": "Five years of Go..."}
///
/// // Client streams audio and may interrupt
/// {"audio": "<base64 PCM>"}
/// {"control": "interrupt"}
///
/// // Server streams back
/// {"type": "audio", "data": "<base64 PCM>"}
/// {"type": "transcript", "role": "model", "text": "Tell me about..."}
/// {"type": "transcript", "role": "user", "text": "I worked on..."}
/// ```
pub fn create_interview_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/interview", get(interview_handler))
        .layer(TraceLayer::new_for_http())
}
