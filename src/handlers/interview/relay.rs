//! Bidirectional relay loops for an interview session.
//!
//! Two loops run concurrently per session. The downstream relay drains the
//! client socket and forwards audio and control frames upstream. The upstream
//! relay drains the Live event stream and forwards audio and transcript
//! messages to the client. Each loop closes its write targets on exit, so
//! either side terminating tears the whole session down.

use axum::extract::ws::{Message as ClientFrame, WebSocket};
use futures_util::StreamExt;
use futures_util::stream::{SplitSink, SplitStream};
use serde_json::Value;
use tokio_tungstenite::tungstenite::Message as UpstreamFrame;

use super::messages::{ClientMessage, ControlCommand, ServerMessage, TranscriptRole};
use crate::core::live::messages::{ClientEnvelope, ServerEvent};
use crate::core::live::{LiveEventStream, LiveSink, SessionError, SessionResult};
use crate::core::ws::SharedSink;

/// Shared write half of the client WebSocket.
pub type ClientSink = SharedSink<SplitSink<WebSocket, ClientFrame>, ClientFrame>;

/// Forward client frames to the Live connection until the client disconnects
/// or a frame cannot be handled.
///
/// Closes the upstream write half on exit.
pub async fn relay_client_to_upstream(
    mut client_rx: SplitStream<WebSocket>,
    upstream_tx: LiveSink,
) -> SessionResult<()> {
    let result = client_loop(&mut client_rx, &upstream_tx).await;

    match &result {
        Ok(()) => tracing::debug!("downstream relay finished"),
        Err(e) if e.is_expected() => tracing::info!("downstream relay finished: {}", e),
        Err(e) => tracing::warn!(error = %e, "downstream relay failed"),
    }

    upstream_tx.close().await;
    result
}

async fn client_loop(
    client_rx: &mut SplitStream<WebSocket>,
    upstream_tx: &LiveSink,
) -> SessionResult<()> {
    loop {
        match client_rx.next().await {
            Some(Ok(ClientFrame::Text(text))) => {
                let Some(envelope) = classify_client_frame(&text)? else {
                    tracing::debug!("ignoring unrecognized client message");
                    continue;
                };
                let json = serde_json::to_string(&envelope)?;
                upstream_tx
                    .send(UpstreamFrame::Text(json.into()))
                    .await
                    .map_err(|e| SessionError::Transport(e.to_string()))?;
            }
            Some(Ok(ClientFrame::Close(_))) | None => {
                return Err(SessionError::ClientDisconnect);
            }
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(SessionError::Transport(e.to_string())),
        }
    }
}

/// Map one client text frame to its upstream envelope.
///
/// Valid JSON that matches no known message shape yields `None` and is
/// skipped. Broken JSON is a session-fatal parse error.
fn classify_client_frame(text: &str) -> SessionResult<Option<ClientEnvelope>> {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::Audio { audio }) => Ok(Some(ClientEnvelope::realtime_audio(audio))),
        Ok(ClientMessage::Control {
            control: ControlCommand::Interrupt,
        }) => Ok(Some(ClientEnvelope::interrupt())),
        Err(_) => match serde_json::from_str::<Value>(text) {
            Ok(_) => Ok(None),
            Err(e) => Err(SessionError::Parse(e)),
        },
    }
}

/// Forward Live events to the client until the upstream connection ends or a
/// frame cannot be handled.
///
/// Closes both write halves on exit.
pub async fn relay_upstream_to_client(
    mut upstream_rx: LiveEventStream,
    client_tx: ClientSink,
    upstream_tx: LiveSink,
) -> SessionResult<()> {
    let result = upstream_loop(&mut upstream_rx, &client_tx).await;

    match &result {
        Ok(()) => tracing::debug!("upstream relay finished"),
        Err(e) if e.is_expected() => tracing::info!("upstream relay finished: {}", e),
        Err(e) => tracing::warn!(error = %e, "upstream relay failed"),
    }

    client_tx.close().await;
    upstream_tx.close().await;
    result
}

async fn upstream_loop(
    upstream_rx: &mut LiveEventStream,
    client_tx: &ClientSink,
) -> SessionResult<()> {
    loop {
        match upstream_rx.next().await {
            Some(Ok(UpstreamFrame::Text(text))) => {
                forward_event(&text, client_tx).await?;
            }
            Some(Ok(UpstreamFrame::Binary(bytes))) => {
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| SessionError::Protocol(format!("non-UTF-8 frame: {e}")))?;
                forward_event(text, client_tx).await?;
            }
            Some(Ok(UpstreamFrame::Close(_))) | None => return Ok(()),
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(SessionError::Transport(e.to_string())),
        }
    }
}

async fn forward_event(text: &str, client_tx: &ClientSink) -> SessionResult<()> {
    let event = match serde_json::from_str::<ServerEvent>(text) {
        Ok(event) => event,
        // Valid JSON of an unexpected shape is skipped, not fatal.
        Err(_) => match serde_json::from_str::<Value>(text) {
            Ok(_) => {
                tracing::debug!("ignoring unrecognized Live event");
                return Ok(());
            }
            Err(e) => return Err(SessionError::Parse(e)),
        },
    };

    for message in translate_event(event) {
        let json = serde_json::to_string(&message)?;
        client_tx
            .send(ClientFrame::Text(json.into()))
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
    }
    Ok(())
}

/// Flatten one Live event into the client messages it carries, in order.
///
/// Within a model turn part, audio precedes text. The input transcription, if
/// present, comes after the model turn.
pub fn translate_event(event: ServerEvent) -> Vec<ServerMessage> {
    let mut messages = Vec::new();

    let Some(content) = event.server_content else {
        return messages;
    };

    if let Some(turn) = content.model_turn {
        for part in turn.parts {
            if let Some(inline) = part.inline_data {
                messages.push(ServerMessage::Audio { data: inline.data });
            }
            if let Some(text) = part.text {
                messages.push(ServerMessage::Transcript {
                    role: TranscriptRole::Model,
                    text,
                });
            }
        }
    }

    if let Some(transcription) = content.input_transcription {
        messages.push(ServerMessage::Transcript {
            role: TranscriptRole::User,
            text: transcription.text,
        });
    }

    messages
}
