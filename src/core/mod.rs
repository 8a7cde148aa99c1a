//! Core domain modules.
//!
//! - `live` - Gemini Live upstream client, wire protocol, and session errors
//! - `ws` - shared WebSocket write-half handle with idempotent close

pub mod live;
pub mod ws;
