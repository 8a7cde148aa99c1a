//! Error taxonomy for one relay session.

use thiserror::Error;

/// Errors that terminate a relay direction or the whole session.
///
/// There are no retries anywhere in the relay: every error cascades to full
/// session teardown. Errors are logged and never propagate past the handler.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Upstream endpoint unreachable or the WebSocket handshake was rejected
    #[error("upstream connect failed: {0}")]
    Connect(String),

    /// The client violated the session protocol (bad or missing init message)
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The client went away; expected terminal condition, not a failure
    #[error("client disconnected")]
    ClientDisconnect,

    /// A structurally broken JSON frame on either side
    #[error("malformed frame: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying connection failure on read or write
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// Whether this is an expected way for a session to end.
    ///
    /// Expected terminations are logged at info, everything else at warn.
    pub fn is_expected(&self) -> bool {
        matches!(self, SessionError::ClientDisconnect)
    }
}
