//! Gemini Live WebSocket client.
//!
//! One [`LiveConnection`] per interview session. The connection is used
//! sequentially during the handshake, then split into a write half (fed by
//! the downstream relay) and a read half (drained by the upstream relay).

use futures_util::StreamExt;
use futures_util::stream::{SplitSink, SplitStream};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::config::LiveConfig;
use super::error::{SessionError, SessionResult};
use super::handshake;
use super::messages::ClientEnvelope;
use crate::core::ws::SharedSink;

/// The underlying WebSocket stream to the Live endpoint.
pub type LiveSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Shared write half of the Live connection.
pub type LiveSink = SharedSink<SplitSink<LiveSocket, Message>, Message>;

/// Read half of the Live connection.
pub type LiveEventStream = SplitStream<LiveSocket>;

/// A connected Gemini Live session.
pub struct LiveConnection {
    socket: LiveSocket,
}

impl LiveConnection {
    /// Open the WebSocket connection to the Live endpoint.
    ///
    /// Fatal on failure; the relay never retries.
    pub async fn connect(config: &LiveConfig) -> SessionResult<Self> {
        let url = config
            .endpoint_url()
            .map_err(|e| SessionError::Connect(e.to_string()))?;

        let (socket, _response) = connect_async(url.as_str())
            .await
            .map_err(|e| SessionError::Connect(e.to_string()))?;

        tracing::info!(model = %config.model, "connected to Gemini Live endpoint");
        Ok(Self { socket })
    }

    /// Serialize and send one envelope.
    pub async fn send(&mut self, envelope: &ClientEnvelope) -> SessionResult<()> {
        use futures_util::SinkExt;

        let json = serde_json::to_string(envelope)?;
        self.socket
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))
    }

    /// Send the setup envelope followed by the begin-interview turn.
    ///
    /// Media must not be sent on this connection before this completes.
    pub async fn handshake(&mut self, config: &LiveConfig, instruction: &str) -> SessionResult<()> {
        self.send(&handshake::setup(&config.model, instruction, &config.voice))
            .await?;
        self.send(&handshake::begin_interview()).await
    }

    /// Split into a shared write half and the event read half.
    pub fn split(self) -> (LiveSink, LiveEventStream) {
        let (sink, stream) = self.socket.split();
        (SharedSink::new(sink), stream)
    }
}
