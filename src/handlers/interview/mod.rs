//! Interview session WebSocket handler
//!
//! This module provides the WebSocket handler for real-time interview
//! sessions: one browser client connection bridged to one Gemini Live
//! connection, with two concurrently running relay loops between them.
//!
//! The handler owns the session lifecycle end to end: the initial
//! `{jd, cr}` message, the upstream connect and handshake, the two relay
//! directions, and the all-or-nothing teardown of both connections.

mod handler;
pub mod messages;
pub mod prompt;
mod relay;

pub use handler::interview_handler;
pub use relay::{ClientSink, translate_event};
