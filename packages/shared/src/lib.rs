//! Code shared by the roomchat client and server.
//!
//! - `protocol`: named events exchanged over the WebSocket
//! - `logger`: tracing subscriber setup for both binaries

pub mod logger;
pub mod protocol;
