//! Interview session lifecycle.
//!
//! Upgrade, session init, upstream handshake, then the two relay loops. The
//! first relay loop to finish tears the whole session down.

use std::sync::Arc;

use axum::extract::ws::{Message as ClientFrame, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::StreamExt;
use uuid::Uuid;

use super::relay::{self, ClientSink};
use super::{messages::SessionInit, prompt};
use crate::core::live::{LiveConnection, SessionError, SessionResult};
use crate::core::ws::SharedSink;
use crate::state::AppState;

/// Maximum size of a single WebSocket frame from the client.
const MAX_WS_FRAME_SIZE: usize = 1024 * 1024;

/// Maximum size of a complete WebSocket message from the client.
const MAX_WS_MESSAGE_SIZE: usize = 2 * 1024 * 1024;

/// WebSocket upgrade handler for `/interview`.
pub async fn interview_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.max_frame_size(MAX_WS_FRAME_SIZE)
        .max_message_size(MAX_WS_MESSAGE_SIZE)
        .on_upgrade(move |socket| handle_interview_socket(socket, state))
}

async fn handle_interview_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4().to_string();
    tracing::info!(%session_id, "interview client connected");

    match establish(socket, &state).await {
        Ok((socket, live)) => run_session(socket, live).await,
        Err(e) if e.is_expected() => {
            tracing::info!(%session_id, "session ended before setup: {}", e);
        }
        Err(e) => {
            tracing::error!(%session_id, error = %e, "failed to establish session");
        }
    }

    tracing::info!(%session_id, "interview session closed");
}

/// Read the session init, connect upstream, and run the handshake.
///
/// No relay traffic flows until this has completed.
async fn establish(
    mut socket: WebSocket,
    state: &AppState,
) -> SessionResult<(WebSocket, LiveConnection)> {
    let init = read_session_init(&mut socket).await?;
    tracing::debug!(
        jd_len = init.jd.len(),
        cr_len = init.cr.len(),
        "received session init"
    );

    let live_config = state.live_config();
    let mut live = LiveConnection::connect(&live_config).await?;

    let instruction = prompt::interviewer_instruction(&init.jd, &init.cr);
    live.handshake(&live_config, &instruction).await?;

    Ok((socket, live))
}

async fn read_session_init(socket: &mut WebSocket) -> SessionResult<SessionInit> {
    loop {
        match socket.recv().await {
            Some(Ok(ClientFrame::Text(text))) => {
                return serde_json::from_str(&text)
                    .map_err(|e| SessionError::Protocol(format!("invalid session init: {e}")));
            }
            Some(Ok(ClientFrame::Close(_))) | None => return Err(SessionError::ClientDisconnect),
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(SessionError::Transport(e.to_string())),
        }
    }
}

/// Run both relay loops until one finishes, then close everything.
async fn run_session(socket: WebSocket, live: LiveConnection) {
    let (client_sink, client_rx) = socket.split();
    let client_tx: ClientSink = SharedSink::new(client_sink);
    let (upstream_tx, upstream_rx) = live.split();

    let mut downstream = tokio::spawn(relay::relay_client_to_upstream(
        client_rx,
        upstream_tx.clone(),
    ));
    let mut upstream = tokio::spawn(relay::relay_upstream_to_client(
        upstream_rx,
        client_tx.clone(),
        upstream_tx.clone(),
    ));

    tokio::select! {
        _ = &mut downstream => {
            upstream_tx.close().await;
            client_tx.close().await;
            let _ = upstream.await;
        }
        _ = &mut upstream => {
            upstream_tx.close().await;
            client_tx.close().await;
            let _ = downstream.await;
        }
    }

    tracing::debug!("both relay loops finished");
}
