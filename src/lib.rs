pub mod config;
pub mod core;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use core::live::{LiveConfig, LiveConnection, SessionError, SessionResult};
pub use core::ws::SharedSink;
pub use state::AppState;
