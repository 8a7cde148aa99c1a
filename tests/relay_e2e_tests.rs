//! End-to-end relay tests
//!
//! Each test runs the real interview router against a mock Live upstream on
//! an ephemeral port, with a real WebSocket client on the other side. The
//! mock records every envelope the gateway sends upstream and can be directed
//! to emit events or close the connection.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_tungstenite::{accept_async, connect_async, tungstenite::Message};

use interview_gateway::config::ServerConfig;
use interview_gateway::{AppState, routes};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Instructions for the mock upstream connection.
enum MockDirective {
    /// Send one text frame to the gateway
    Event(String),
    /// Close the connection
    Close,
}

/// Handle on a one-connection mock Live server.
struct MockUpstream {
    url: String,
    /// Envelopes the gateway sent upstream, in arrival order
    envelopes: mpsc::UnboundedReceiver<Value>,
    directives: mpsc::UnboundedSender<MockDirective>,
}

async fn start_mock_upstream() -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");

    let (env_tx, env_rx) = mpsc::unbounded_channel();
    let (dir_tx, mut dir_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let Ok((stream, _)) = listener.accept().await else {
            return;
        };
        let Ok(ws) = accept_async(stream).await else {
            return;
        };
        let (mut write, mut read) = ws.split();

        loop {
            tokio::select! {
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Ok(value) = serde_json::from_str::<Value>(&text) {
                            if env_tx.send(value).is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                },
                directive = dir_rx.recv() => match directive {
                    Some(MockDirective::Event(text)) => {
                        if write.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    Some(MockDirective::Close) => {
                        let _ = write.send(Message::Close(None)).await;
                        break;
                    }
                    None => break,
                },
            }
        }
    });

    MockUpstream {
        url: format!("ws://{addr}"),
        envelopes: env_rx,
        directives: dir_tx,
    }
}

/// Start the gateway with the Live endpoint pointed at the mock. Returns the
/// client-facing WebSocket URL.
async fn start_gateway(upstream_url: &str) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        gemini_api_key: "test-key".to_string(),
        gemini_model: "gemini-2.0-flash-exp".to_string(),
        gemini_voice: "Puck".to_string(),
        gemini_endpoint: Some(upstream_url.to_string()),
        cors_allowed_origins: None,
    };
    let state = AppState::new(config);
    let app = routes::interview::create_interview_router().with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind gateway");
    let addr = listener.local_addr().expect("gateway addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("gateway serve");
    });

    format!("ws://{addr}/interview")
}

type ClientWs =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn connect_client(gateway_url: &str) -> ClientWs {
    let (ws, _) = timeout(TEST_TIMEOUT, connect_async(gateway_url))
        .await
        .expect("timed out connecting to gateway")
        .expect("client connect");
    ws
}

async fn send_json(client: &mut ClientWs, value: Value) {
    client
        .send(Message::Text(value.to_string().into()))
        .await
        .expect("client send");
}

async fn recv_json(client: &mut ClientWs) -> Value {
    loop {
        let frame = timeout(TEST_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for client message")
            .expect("client stream ended")
            .expect("client recv");
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).expect("client frame is JSON");
        }
    }
}

async fn recv_envelope(mock: &mut MockUpstream) -> Value {
    timeout(TEST_TIMEOUT, mock.envelopes.recv())
        .await
        .expect("timed out waiting for upstream envelope")
        .expect("upstream connection ended")
}

/// Send the session init and drain the two handshake envelopes.
async fn establish_session(mock: &mut MockUpstream, client: &mut ClientWs) {
    send_json(client, json!({"jd": "Backend role", "cr": "5y Go"})).await;
    let setup = recv_envelope(mock).await;
    assert!(setup.get("setup").is_some(), "expected setup, got {setup}");
    let begin = recv_envelope(mock).await;
    assert!(
        begin.get("client_content").is_some(),
        "expected begin turn, got {begin}"
    );
}

#[tokio::test]
async fn test_handshake_setup_and_begin_turn() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;

    send_json(&mut client, json!({"jd": "Backend role", "cr": "5y Go"})).await;

    let setup = recv_envelope(&mut mock).await;
    assert_eq!(setup["setup"]["model"], "models/gemini-2.0-flash-exp");
    assert_eq!(
        setup["setup"]["generation_config"]["response_modalities"],
        json!(["AUDIO"])
    );
    assert_eq!(
        setup["setup"]["generation_config"]["speech_config"]["voice_config"]
            ["prebuilt_voice_config"]["voice_name"],
        "Puck"
    );
    let instruction = setup["setup"]["system_instruction"]["parts"][0]["text"]
        .as_str()
        .expect("system instruction text");
    assert!(instruction.contains("Backend role"));
    assert!(instruction.contains("5y Go"));

    let begin = recv_envelope(&mut mock).await;
    assert_eq!(begin["client_content"]["turns"][0]["role"], "user");
    assert_eq!(
        begin["client_content"]["turns"][0]["parts"][0]["text"],
        "Please begin the interview."
    );
    assert_eq!(begin["client_content"]["turn_complete"], true);
}

#[tokio::test]
async fn test_audio_chunks_forwarded_in_order() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    for i in 0..5 {
        send_json(&mut client, json!({"audio": format!("chunk-{i}")})).await;
    }

    for i in 0..5 {
        let envelope = recv_envelope(&mut mock).await;
        let chunk = &envelope["realtime_input"]["media_chunks"][0];
        assert_eq!(chunk["data"], format!("chunk-{i}"));
        assert_eq!(chunk["mime_type"], "audio/pcm");
    }
}

#[tokio::test]
async fn test_interrupt_forwarded() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    send_json(&mut client, json!({"control": "interrupt"})).await;

    let envelope = recv_envelope(&mut mock).await;
    assert_eq!(envelope, json!({"client_content": {"interrupt": true}}));
}

#[tokio::test]
async fn test_model_turn_forwarded_to_client() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    let event = json!({
        "serverContent": {
            "modelTurn": {
                "parts": [
                    {"inlineData": {"data": "QQ=="}},
                    {"text": "Tell me about your last project."}
                ]
            }
        }
    });
    mock.directives
        .send(MockDirective::Event(event.to_string()))
        .expect("send directive");

    assert_eq!(
        recv_json(&mut client).await,
        json!({"type": "audio", "data": "QQ=="})
    );
    assert_eq!(
        recv_json(&mut client).await,
        json!({
            "type": "transcript",
            "role": "model",
            "text": "Tell me about your last project."
        })
    );
}

#[tokio::test]
async fn test_input_transcription_has_user_role() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    let event = json!({
        "serverContent": {
            "inputTranscription": {"text": "I worked on Go services"}
        }
    });
    mock.directives
        .send(MockDirective::Event(event.to_string()))
        .expect("send directive");

    assert_eq!(
        recv_json(&mut client).await,
        json!({
            "type": "transcript",
            "role": "user",
            "text": "I worked on Go services"
        })
    );
}

#[tokio::test]
async fn test_unknown_client_json_is_skipped() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    send_json(&mut client, json!({"video": "not supported"})).await;
    send_json(&mut client, json!({"audio": "QUJD"})).await;

    // The unknown message produces nothing; the next envelope is the audio.
    let envelope = recv_envelope(&mut mock).await;
    assert_eq!(envelope["realtime_input"]["media_chunks"][0]["data"], "QUJD");
}

#[tokio::test]
async fn test_client_disconnect_closes_upstream() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    client.close(None).await.expect("client close");

    // The gateway closes its upstream connection, ending the mock task and
    // with it the envelope channel.
    let next = timeout(TEST_TIMEOUT, mock.envelopes.recv())
        .await
        .expect("timed out waiting for upstream teardown");
    assert!(next.is_none());
}

#[tokio::test]
async fn test_upstream_close_ends_client_session() {
    let mut mock = start_mock_upstream().await;
    let gateway_url = start_gateway(&mock.url).await;
    let mut client = connect_client(&gateway_url).await;
    establish_session(&mut mock, &mut client).await;

    mock.directives
        .send(MockDirective::Close)
        .expect("send directive");

    // The gateway tears the client side down too.
    loop {
        match timeout(TEST_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for client teardown")
        {
            Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
            Some(Ok(_)) => continue,
        }
    }
}
