//! Gemini Live upstream client module.
//!
//! This module provides the client side of the Gemini Live
//! `BidiGenerateContent` WebSocket API:
//! - [`LiveConnection`] - persistent WebSocket connection to the Live endpoint
//! - [`handshake`] - setup and begin-turn envelope construction
//! - [`messages`] - outbound envelopes and inbound server events
//! - [`SessionError`] - error taxonomy for one relay session
//!
//! # Protocol Overview
//!
//! A session sends exactly one `setup` envelope, then a `client_content`
//! envelope starting the first turn, then any number of `realtime_input`
//! media envelopes. The server streams `serverContent` events carrying
//! model audio, model text, and input transcriptions, in no particular
//! order beyond per-connection delivery order.

mod client;
pub mod config;
mod error;
pub mod handshake;
pub mod messages;

pub use client::{LiveConnection, LiveEventStream, LiveSink, LiveSocket};
pub use config::{
    DEFAULT_LIVE_MODEL, DEFAULT_LIVE_VOICE, GEMINI_LIVE_HOST, GEMINI_LIVE_PATH, LiveConfig,
};
pub use error::{SessionError, SessionResult};
